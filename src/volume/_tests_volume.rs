#[cfg(test)]
mod _tests_volume {
    use super::super::profile::ResistProfile;
    use super::super::resist_volume::{ResistVolume, VolumeAxes};
    use crate::geometry::{Point2d, Rectangle};

    const TOL: f64 = 1e-9;

    fn boundary_1d(pitch: f64) -> Rectangle {
        Rectangle::new(Point2d::new(-pitch / 2.0, 0.0), Point2d::new(pitch / 2.0, 0.0))
    }

    fn boundary_2d(px: f64, py: f64) -> Rectangle {
        Rectangle::new(
            Point2d::new(-px / 2.0, -py / 2.0),
            Point2d::new(px / 2.0, py / 2.0),
        )
    }

    #[test]
    fn test_lateral_counts_are_odd() {
        for (pitch, step) in [(800.0, 25.0), (800.0, 20.0), (750.0, 25.0), (100.0, 60.0)] {
            let volume = ResistVolume::new(&boundary_2d(pitch, pitch), 500.0, step, 25.0);
            assert_eq!(volume.x().len() % 2, 1, "pitch {} step {}", pitch, step);
            assert_eq!(volume.y().len() % 2, 1);
            // The grid spans the pitch exactly.
            assert!((volume.x()[volume.x().len() - 1] - pitch / 2.0).abs() < TOL);
            assert!((volume.x()[0] + pitch / 2.0).abs() < TOL);
        }
    }

    #[test]
    fn test_lateral_step_not_coarser_than_desired() {
        let volume = ResistVolume::new(&boundary_2d(800.0, 800.0), 500.0, 25.0, 25.0);
        assert!(volume.stepx() <= 25.0 + TOL);
        assert!((volume.stepx() * (volume.x().len() - 1) as f64 - 800.0).abs() < TOL);
    }

    #[test]
    fn test_vertical_samples_tile_thickness() {
        // 500 / 30 is not an integer count, so the step shrinks.
        let volume = ResistVolume::new(&boundary_1d(800.0), 500.0, 25.0, 30.0);
        let z = volume.z();
        assert!((z[0] - 500.0).abs() < TOL);
        assert!(z[z.len() - 1].abs() < TOL);
        let dz = z[0] - z[1];
        assert!((dz * (z.len() - 1) as f64 - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_exact_vertical_division_keeps_step() {
        let volume = ResistVolume::new(&boundary_1d(800.0), 1000.0, 25.0, 25.0);
        assert!((volume.stepz() - 25.0).abs() < TOL);
        assert_eq!(volume.z().len(), 41);
    }

    #[test]
    fn test_axes_classification() {
        let volume = ResistVolume::new(&boundary_1d(800.0), 500.0, 25.0, 25.0);
        assert_eq!(volume.axes(), VolumeAxes::Xz2d);
        assert!(volume.has_x() && !volume.has_y() && volume.has_z());

        let surface = ResistVolume::surface(&boundary_2d(800.0, 600.0), 25.0);
        assert_eq!(surface.axes(), VolumeAxes::Xy2d);
        assert_eq!(surface.z().len(), 1);

        let line = ResistVolume::surface(&boundary_1d(800.0), 25.0);
        assert_eq!(line.axes(), VolumeAxes::X1d);
    }

    #[test]
    fn test_like_copies_geometry_not_data() {
        let mut volume = ResistVolume::new(&boundary_1d(800.0), 500.0, 25.0, 25.0);
        volume.values_mut().fill(3.0);

        let fresh = ResistVolume::like(&volume);
        assert_eq!(fresh.values().dim(), volume.values().dim());
        assert_eq!(fresh.x(), volume.x());
        assert!(fresh.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_profile_rejects_3d_volume() {
        let volume = ResistVolume::new(&boundary_2d(800.0, 800.0), 500.0, 25.0, 25.0);
        assert!(ResistProfile::new(&volume, 10.0).is_err());
    }

    #[test]
    fn test_profile_rejects_empty_volume() {
        let volume = ResistVolume::surface(&boundary_2d(0.0, 0.0), 25.0);
        assert!(ResistProfile::new(&volume, 10.0).is_err());
    }

    #[test]
    fn test_profile_extracts_trench() {
        // Develop-time field on a 1D x depth volume: fast development in
        // the middle columns, slow at the sides. At the level between the
        // two, the profile outlines the trench.
        let mut volume = ResistVolume::new(&boundary_1d(800.0), 500.0, 100.0, 100.0);
        let (rows, cols, slices) = volume.values().dim();
        assert_eq!(rows, 1);
        for c in 0..cols {
            let fast = c > cols / 4 && c < 3 * cols / 4;
            for s in 0..slices {
                // The last slice is the resist top: the trench develops
                // quickly in the upper half of the center columns only.
                let near_top = s >= slices / 2;
                volume.values_mut()[(0, c, s)] = if fast && near_top { 1.0 } else { 100.0 };
            }
        }

        let profile = ResistProfile::new(&volume, 10.0).unwrap();
        assert_eq!(profile.polygons().len(), 1);
        assert!(!profile.polygons()[0].is_empty());
    }
}
