#[cfg(test)]
mod _tests_source {
    use super::super::source_model::{annular, coherent, conventional, source_shape_plugins};
    use super::super::source_shape::SourceShape;
    use crate::plugin::default_args;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_coherent_is_single_point() {
        let model = coherent(&[0.0, 0.0]).unwrap();
        let source = SourceShape::new(&model, 0.05, 0.05).unwrap();

        assert_eq!(source.non_zeros().len(), 1);
        assert!(source.sx_min().abs() < TOL);
        assert!(source.sx_max().abs() < TOL);
        assert!(source.sy_min().abs() < TOL);
        assert!(source.sy_max().abs() < TOL);
        assert!((source.total() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_coherent_tilt_moves_the_point() {
        let model = coherent(&[0.3, -0.2]).unwrap();
        let source = SourceShape::new(&model, 0.05, 0.05).unwrap();

        assert_eq!(source.non_zeros().len(), 1);
        assert!((source.sx_min() - 0.3).abs() < TOL);
        assert!((source.sy_min() + 0.2).abs() < TOL);
    }

    #[test]
    fn test_annular_support_bounds() {
        // sigma_in = 0.3, sigma_out = 0.8: the support reaches +-0.8 in
        // direction cosines within the grid resolution.
        let model = annular(&[0.3, 0.8]).unwrap();
        let source = SourceShape::new(&model, 0.02, 0.02).unwrap();

        assert!((source.sx_min() + 0.8).abs() < 1e-3);
        assert!((source.sx_max() - 0.8).abs() < 1e-3);
        assert!((source.sy_min() + 0.8).abs() < 1e-3);
        assert!((source.sy_max() - 0.8).abs() < 1e-3);
    }

    #[test]
    fn test_annular_hole_is_dark() {
        let model = annular(&[0.3, 0.8]).unwrap();
        assert_eq!(model.calculate(0.0, 0.0), 0.0);
        assert_eq!(model.calculate(0.5, 0.0), 1.0);
        assert_eq!(model.calculate(0.9, 0.0), 0.0);
        // The inner edge belongs to the ring.
        assert_eq!(model.calculate(0.3, 0.0), 1.0);
    }

    #[test]
    fn test_conventional_disc() {
        let model = conventional(&[0.5]).unwrap();
        assert_eq!(model.calculate(0.0, 0.0), 1.0);
        assert_eq!(model.calculate(0.3, 0.3), 1.0);
        assert_eq!(model.calculate(0.6, 0.0), 0.0);

        let source = SourceShape::new(&model, 0.05, 0.05).unwrap();
        assert!((source.sx_max() - 0.5).abs() < TOL);
    }

    #[test]
    fn test_grid_is_symmetric_around_zero() {
        let model = conventional(&[0.5]).unwrap();
        let source = SourceShape::new(&model, 0.1, 0.1).unwrap();

        let cx = source.cx();
        assert_eq!(cx.len() % 2, 1);
        let mid = cx.len() / 2;
        assert!(cx[mid].abs() < TOL);
        assert!((cx[0] + 1.0).abs() < TOL);
        assert!((cx[cx.len() - 1] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_zero_step_rejected() {
        let model = conventional(&[0.5]).unwrap();
        assert!(SourceShape::new(&model, 0.0, 0.1).is_err());
    }

    #[test]
    fn test_empty_source_rejected() {
        // A coherent point that no grid node hits exactly... does not
        // exist: the tilt rounds onto the grid. Use an annulus thinner
        // than the grid pitch far from any node instead.
        let model = annular(&[0.8501, 0.8503]).unwrap();
        assert!(SourceShape::new(&model, 0.1, 0.1).is_err());
    }

    #[test]
    fn test_source_plugin_registry_defaults() {
        for plugin in source_shape_plugins() {
            let args = default_args(plugin.parameters);
            let model = (plugin.create)(&args).unwrap();
            let source = SourceShape::new(&model, 0.05, 0.05).unwrap();
            assert!(source.total() > 0.0, "{} produced no light", plugin.name);
        }
    }
}
