#[cfg(test)]
mod _tests_sim {
    use num_complex::Complex64;

    use crate::geometry::{Point2d, Rectangle};
    use crate::mask::{line_1d, Boundary, Mask};
    use crate::optics::{
        coherent, Exposure, ImagingTool, OpticalTransferFunction, PupilFilterModel, SourceShape,
    };
    use crate::resist::{
        mack_rate_model, Development, ExposureResistModel, PebResistModel, PostExposureBake,
    };
    use crate::sim;
    use crate::volume::ResistVolume;
    use crate::wafer::{Refraction, ResistLayer, WaferLayer, WaferStack};

    const TOL: f64 = 1e-9;

    fn coherent_tool() -> ImagingTool {
        let model = coherent(&[0.0, 0.0]).unwrap();
        let source = SourceShape::new(&model, 0.05, 0.05).unwrap();
        ImagingTool::new(source, PupilFilterModel::Empty, 248.0, 0.6, 4.0, 0.0, 1.0)
    }

    fn resist_layer() -> ResistLayer {
        ResistLayer::new(
            500.0,
            ExposureResistModel::new(248.0, 0.7, 0.05, 0.05, 1.7),
            PebResistModel::new(30.0, 30.0),
            mack_rate_model(&[100.0, 0.5, 0.5, 2.0]).unwrap(),
        )
    }

    fn standard_stack() -> WaferStack {
        // Substrate matched to the resist index: no standing waves, so the
        // depth dependence of the image stays monotone and the develop-time
        // assertions are not at the mercy of interference nodes.
        let mut stack = WaferStack::new();
        stack
            .push(WaferLayer::substrate(Refraction::Constant(Complex64::new(
                1.7, 0.0,
            ))))
            .unwrap();
        stack
            .push(WaferLayer::Resist(resist_layer()))
            .unwrap();
        stack
            .push(WaferLayer::environment(Refraction::Constant(
                Complex64::new(1.0, 0.0),
            )))
            .unwrap();
        stack
    }

    #[test]
    fn test_diffraction_rejects_bad_mask() {
        let boundary = Boundary::new(Point2d::new(0.0, 0.0), Point2d::new(0.0, 0.0), 1.0, 0.0);
        let mask = Mask::new(Vec::new(), boundary).unwrap();
        assert!(sim::diffraction(&coherent_tool(), &mask).is_err());
    }

    #[test]
    fn test_aerial_image_of_clear_mask_is_flat() {
        let boundary = Boundary::new(
            Point2d::new(-400.0, 0.0),
            Point2d::new(400.0, 0.0),
            1.0,
            0.0,
        );
        let mask = Mask::new(Vec::new(), boundary).unwrap();
        let tool = coherent_tool();
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, None, None);

        let image = sim::aerial_image(&diffraction, &otf, 25.0).unwrap();

        // A clear mask under coherent illumination gives a uniform image
        // at the (air) refractive index level.
        let first = image.values()[(0, 0, 0)];
        assert!((first - 1.0).abs() < 1e-3);
        for v in image.values().iter() {
            assert!((v - first).abs() < TOL);
        }
    }

    #[test]
    fn test_aerial_image_of_line_is_dark_at_center() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, None, None);

        let image = sim::aerial_image(&diffraction, &otf, 25.0).unwrap();
        let cols = image.x().len();
        let center = image.values()[(0, cols / 2, 0)];
        let edge = image.values()[(0, 0, 0)];

        assert!(center < edge, "center {} should be darker than edge {}", center, edge);
        assert!(image.values().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_aerial_image_periodic_duplicate() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, None, None);

        let image = sim::aerial_image(&diffraction, &otf, 25.0).unwrap();
        let cols = image.x().len();
        assert!((image.values()[(0, cols - 1, 0)] - image.values()[(0, 0, 0)]).abs() < TOL);
    }

    #[test]
    fn test_image_in_resist_needs_stack() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, None, None);
        assert!(sim::image_in_resist(&diffraction, &otf, 25.0, 50.0).is_err());
    }

    #[test]
    fn test_image_in_resist_dimensions() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let stack = standard_stack();
        let exposure = Exposure::new(0.0, 30.0, 1.0);
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, Some(&exposure), Some(&stack));

        let image = sim::image_in_resist(&diffraction, &otf, 25.0, 50.0).unwrap();
        let (rows, cols, slices) = image.values().dim();
        assert_eq!(rows, 1);
        assert_eq!(cols % 2, 1);
        assert_eq!(slices, 11);
        // The last slice is the resist surface.
        assert!(image.z()[slices - 1].abs() < TOL);
        assert!((image.z()[0] - 500.0).abs() < TOL);
        assert!(image.values().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_latent_image_bounded() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let stack = standard_stack();
        let exposure = Exposure::new(0.0, 30.0, 1.0);
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, Some(&exposure), Some(&stack));
        let image = sim::image_in_resist(&diffraction, &otf, 25.0, 50.0).unwrap();

        let latent = sim::latent_image(&image, &resist_layer(), &exposure);
        for &v in latent.values().iter() {
            assert!((0.0..=1.0).contains(&v), "PAC {} out of range", v);
        }
        // More light leaves less PAC.
        let cols = latent.x().len();
        let bright = latent.values()[(0, 0, 10)];
        let dark = latent.values()[(0, cols / 2, 10)];
        assert!(bright < dark);
    }

    #[test]
    fn test_zero_dose_leaves_full_pac() {
        let boundary = Rectangle::new(Point2d::new(-400.0, 0.0), Point2d::new(400.0, 0.0));
        let mut image = ResistVolume::new(&boundary, 500.0, 25.0, 50.0);
        image.values_mut().fill(0.7);

        let exposure = Exposure::new(0.0, 0.0, 1.0);
        let latent = sim::latent_image(&image, &resist_layer(), &exposure);
        assert!(latent.values().iter().all(|&v| (v - 1.0).abs() < TOL));
    }

    #[test]
    fn test_peb_conserves_constant_field() {
        let boundary = Rectangle::new(Point2d::new(-400.0, 0.0), Point2d::new(400.0, 0.0));
        let mut latent = ResistVolume::new(&boundary, 500.0, 25.0, 50.0);
        latent.values_mut().fill(0.5);

        let peb = PostExposureBake::new(60.0, 110.0);
        let diffused = sim::peb_latent_image(&latent, &resist_layer(), &peb);

        for &v in diffused.values().iter() {
            assert!((v - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_peb_in_plane_mass_conservation() {
        // Single-slice volume: only the circular in-plane convolution acts,
        // which conserves the total exactly.
        let boundary = Rectangle::new(Point2d::new(-400.0, 0.0), Point2d::new(400.0, 0.0));
        let mut latent = ResistVolume::surface(&boundary, 25.0);
        for (i, v) in latent.values_mut().iter_mut().enumerate() {
            *v = 0.2 + 0.01 * (i % 7) as f64;
        }
        let before: f64 = latent.values().sum();

        let peb = PostExposureBake::new(60.0, 110.0);
        let diffused = sim::peb_latent_image(&latent, &resist_layer(), &peb);
        let after: f64 = diffused.values().sum();

        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_peb_smooths_contrast() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let stack = standard_stack();
        let exposure = Exposure::new(0.0, 30.0, 1.0);
        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, Some(&exposure), Some(&stack));
        let image = sim::image_in_resist(&diffraction, &otf, 25.0, 50.0).unwrap();
        let latent = sim::latent_image(&image, &resist_layer(), &exposure);

        // A hotter bake diffuses more.
        let mild = sim::peb_latent_image(&latent, &resist_layer(), &PostExposureBake::new(60.0, 110.0));
        let spread = |v: &ResistVolume| {
            let max = v.values().iter().cloned().fold(f64::MIN, f64::max);
            let min = v.values().iter().cloned().fold(f64::MAX, f64::min);
            max - min
        };
        assert!(spread(&mild) <= spread(&latent) + TOL);
    }

    #[test]
    fn test_develop_time_field_uniform_rate() {
        let boundary = Rectangle::new(Point2d::new(-400.0, 0.0), Point2d::new(400.0, 0.0));
        let mut peb_image = ResistVolume::new(&boundary, 500.0, 25.0, 50.0);
        peb_image.values_mut().fill(0.5);

        let resist = resist_layer();
        let rate = resist.rate.calculate(0.5, 0.0);
        let times = sim::develop_time_contours(&peb_image, &resist).unwrap();

        let (_, cols, slices) = times.values().dim();
        // Top surface develops immediately; each slice below adds step/rate.
        for s in 0..slices {
            let expected = (slices - 1 - s) as f64 * 50.0 / rate;
            let got = times.values()[(0, cols / 2, s)];
            assert!(
                (got - expected).abs() < expected.abs() * 1e-9 + 1e-9,
                "slice {}: {} vs {}",
                s,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_full_pipeline_produces_profile() {
        let mask = line_1d(&[250.0, 800.0]).unwrap();
        let tool = coherent_tool();
        let stack = standard_stack();
        let exposure = Exposure::new(0.0, 30.0, 1.0);
        let peb = PostExposureBake::new(60.0, 110.0);
        let development = Development::new(30.0);
        let resist = resist_layer();

        let diffraction = sim::diffraction(&tool, &mask).unwrap();
        let otf = OpticalTransferFunction::new(&tool, Some(&exposure), Some(&stack));
        let image = sim::image_in_resist(&diffraction, &otf, 25.0, 50.0).unwrap();
        let latent = sim::latent_image(&image, &resist, &exposure);
        let diffused = sim::peb_latent_image(&latent, &resist, &peb);
        let times = sim::develop_time_contours(&diffused, &resist).unwrap();
        let profile = sim::resist_profile(&times, &development).unwrap();

        // The dark line leaves resist standing: under it development takes
        // much longer than in the bright field.
        let (_, cols, _) = times.values().dim();
        let center_bottom = times.values()[(0, cols / 2, 0)];
        let edge_bottom = times.values()[(0, 0, 0)];
        assert!(center_bottom > edge_bottom);
        assert!(edge_bottom < development.time);
        assert!(center_bottom > development.time);

        assert!(!profile.polygons().is_empty());
    }
}
