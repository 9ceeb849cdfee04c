#[cfg(test)]
mod _tests_optics {
    use ndarray::Array3;
    use num_complex::Complex64;

    use super::super::exposure::Exposure;
    use super::super::imaging_tool::ImagingTool;
    use super::super::otf::OpticalTransferFunction;
    use super::super::pupil::{central_obscuration, PupilFilterModel};
    use super::super::source_model::coherent;
    use super::super::source_shape::SourceShape;

    const TOL: f64 = 1e-12;

    fn tool_with_filter(filter: PupilFilterModel) -> ImagingTool {
        let model = coherent(&[0.0, 0.0]).unwrap();
        let source = SourceShape::new(&model, 0.05, 0.05).unwrap();
        ImagingTool::new(source, filter, 248.0, 0.6, 4.0, 0.0, 1.0)
    }

    #[test]
    fn test_empty_pupil_filter_is_unity() {
        let tool = tool_with_filter(PupilFilterModel::Empty);
        assert!((tool.filter(0.3, -0.2) - Complex64::new(1.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_central_obscuration_blocks_the_middle() {
        let filter = central_obscuration(&[0.2]).unwrap();
        let tool = tool_with_filter(filter);
        assert!(tool.filter(0.0, 0.0).norm() < TOL);
        assert!(tool.filter(0.1, 0.1).norm() < TOL);
        assert!((tool.filter(0.3, 0.0).norm() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_reduction_is_unity_on_axis() {
        let tool = tool_with_filter(PupilFilterModel::Empty);
        assert!((tool.reduction_in_air(0.0, 0.0) - 1.0).abs() < TOL);
        // Off axis the obliquity correction exceeds one for a 4x tool.
        assert!(tool.reduction_in_air(0.5, 0.0) > 1.0);
    }

    #[test]
    fn test_flare_lifts_the_floor() {
        let model = coherent(&[0.0, 0.0]).unwrap();
        let source = SourceShape::new(&model, 0.05, 0.05).unwrap();
        let tool = ImagingTool::new(source, PupilFilterModel::Empty, 248.0, 0.6, 4.0, 0.05, 1.0);

        let mut intensity = Array3::zeros((1, 3, 1));
        intensity[(0, 1, 0)] = 1.0;
        tool.apply_flare(&mut intensity);

        assert!((intensity[(0, 0, 0)] - 0.05).abs() < TOL);
        assert!((intensity[(0, 1, 0)] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_zero_flare_is_identity() {
        let tool = tool_with_filter(PupilFilterModel::Empty);
        let mut intensity = Array3::from_elem((1, 2, 1), 0.3);
        tool.apply_flare(&mut intensity);
        assert!((intensity[(0, 0, 0)] - 0.3).abs() < TOL);
    }

    #[test]
    fn test_defocus_phase() {
        let exposure = Exposure::new(100.0, 30.0, 1.0);
        // On axis there is no path difference.
        assert!((exposure.defocus(0.0, 0.0, 248.0) - Complex64::new(1.0, 0.0)).norm() < TOL);

        let c = 0.5;
        let phase = exposure.defocus(c, 0.0, 248.0);
        assert!((phase.norm() - 1.0).abs() < TOL);
        let opd = 100.0 * (1.0 - (1.0 - c * c).sqrt());
        let expected = (Complex64::i() * 2.0 * std::f64::consts::PI * opd / 248.0).exp();
        assert!((phase - expected).norm() < TOL);
    }

    #[test]
    fn test_no_focus_no_phase() {
        let exposure = Exposure::new(0.0, 30.0, 1.0);
        assert!((exposure.defocus(0.5, 0.3, 248.0) - Complex64::new(1.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn test_effective_dose() {
        let exposure = Exposure::new(0.0, 30.0, 1.2);
        assert!((exposure.dose() - 36.0).abs() < TOL);
    }

    #[test]
    fn test_otf_zero_outside_pupil() {
        let tool = tool_with_filter(PupilFilterModel::Empty);
        let otf = OpticalTransferFunction::new(&tool, None, None);

        assert!(otf.calc(0.7, 0.0, 0.0).unwrap().norm() < TOL);
        assert!(otf.calc(0.5, 0.5, 0.0).unwrap().norm() < TOL);
        assert!(otf.calc(0.3, 0.0, 0.0).unwrap().norm() > 0.9);
    }

    #[test]
    fn test_otf_without_collaborators_is_reduction_only() {
        let tool = tool_with_filter(PupilFilterModel::Empty);
        let otf = OpticalTransferFunction::new(&tool, None, None);

        let v = otf.calc(0.4, 0.0, 0.0).unwrap();
        assert!((v.re - tool.reduction_in_air(0.4, 0.0)).abs() < TOL);
        assert!(v.im.abs() < TOL);
    }

    #[test]
    fn test_otf_applies_defocus() {
        let tool = tool_with_filter(PupilFilterModel::Empty);
        let exposure = Exposure::new(150.0, 30.0, 1.0);
        let otf = OpticalTransferFunction::new(&tool, Some(&exposure), None);

        let focused = OpticalTransferFunction::new(&tool, None, None)
            .calc(0.4, 0.0, 0.0)
            .unwrap();
        let defocused = otf.calc(0.4, 0.0, 0.0).unwrap();
        assert!((defocused.norm() - focused.norm()).abs() < TOL);
        assert!((defocused - focused).norm() > 1e-3);
    }
}
