#[cfg(test)]
mod _tests_resist {
    use super::super::exposure_model::ExposureResistModel;
    use super::super::peb::{PebResistModel, PostExposureBake};
    use super::super::rate::{
        enhanced_mack_rate_model, mack_rate_model, notch_depth_rate_model, notch_rate_model,
        rate_model_plugins,
    };
    use crate::config::GAS_CONSTANT;
    use crate::plugin::default_args;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_dill_refraction() {
        // wavelength 248 nm, A = 0.7, B = 0.05, n = 1.7, m = 1.
        let model = ExposureResistModel::new(248.0, 0.7, 0.05, 0.01, 1.7);
        let nk = model.refraction(1.0);
        assert!((nk.re - 1.7).abs() < TOL);
        let expected = 248.0 / (4.0 * std::f64::consts::PI) * 0.75 * 1e-3;
        assert!((nk.im - expected).abs() < TOL);
        assert!((nk.im - 0.0148).abs() < 1e-4);
    }

    #[test]
    fn test_dill_unexposed_absorbs_more() {
        let model = ExposureResistModel::new(248.0, 0.7, 0.05, 0.01, 1.7);
        // m = 1 is unexposed (full PAC); bleaching (m -> 0) removes the A
        // term from the absorption.
        assert!(model.refraction(1.0).im > model.refraction(0.0).im);
        let bleached = 248.0 / (4.0 * std::f64::consts::PI) * 0.05 * 1e-3;
        assert!((model.refraction(0.0).im - bleached).abs() < TOL);
    }

    #[test]
    fn test_peb_diffusion_length() {
        let model = PebResistModel::new(30.0, 50.0);
        let temp = 110.0;
        let time = 60.0;
        let temp_k = 383.15;
        let expected_d = (50.0 - 30.0 / (GAS_CONSTANT * temp_k)).exp();
        assert!((model.diffusivity(temp) - expected_d).abs() < expected_d * 1e-12);

        let expected_sigma = (2.0 * expected_d * time).sqrt();
        assert!((model.diffusion_length(temp, time) - expected_sigma).abs() < 1e-9);
    }

    #[test]
    fn test_peb_kernel_normalized_and_odd() {
        let model = PebResistModel::new(30.0, 50.0);
        let peb = PostExposureBake::new(60.0, 110.0);
        let kernel = model.kernel(&peb, 5.0);

        assert_eq!(kernel.len() % 2, 1);
        let sum: f64 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);

        // Symmetric around the center sample.
        let n = kernel.len();
        for k in 0..n / 2 {
            assert!((kernel[k] - kernel[n - 1 - k]).abs() < 1e-12);
        }
        // Peak in the middle.
        assert!(kernel[n / 2] >= kernel[0]);
    }

    #[test]
    fn test_peb_kernel_zero_step_is_identity() {
        let model = PebResistModel::new(30.0, 50.0);
        let peb = PostExposureBake::new(60.0, 110.0);
        assert_eq!(model.kernel(&peb, 0.0), vec![1.0]);
    }

    #[test]
    fn test_mack_endpoints() {
        // Rmax = 100, Rmin = 0.5, Mth = 0.5, n = 2.
        let model = mack_rate_model(&[100.0, 0.5, 0.5, 2.0]).unwrap();
        // Full PAC develops at Rmin.
        assert!((model.calculate(1.0, 0.0) - 0.5).abs() < TOL);
        // Fully exposed resist develops at about Rmax.
        let fast = model.calculate(0.0, 0.0);
        assert!((fast - 100.0).abs() / 100.0 < 0.3);
        assert!(fast > model.calculate(0.5, 0.0));
    }

    #[test]
    fn test_mack_monotone_in_pac() {
        let model = mack_rate_model(&[100.0, 0.5, 0.5, 2.0]).unwrap();
        let mut previous = f64::MAX;
        for k in 0..=10 {
            let rate = model.calculate(k as f64 / 10.0, 0.0);
            assert!(rate <= previous + TOL);
            previous = rate;
        }
    }

    #[test]
    fn test_enhanced_model_resin_rate() {
        let model = enhanced_mack_rate_model(&[100.0, 0.5, 10.0, 4.0, 20.0]).unwrap();
        // At pac = 1 the inhibition term dominates: rate -> Rmin.
        assert!((model.calculate(1.0, 0.0) - 0.5).abs() < 0.1);
        // At pac = 0 the enhancement term dominates: rate -> Rmax.
        assert!((model.calculate(0.0, 0.0) - 100.0).abs() < TOL);
    }

    #[test]
    fn test_notch_depth_inhibition() {
        let base = notch_rate_model(&[100.0, 0.5, 1.5, 0.5, 10.0]).unwrap();
        let depth = notch_depth_rate_model(&[100.0, 0.5, 1.5, 0.5, 10.0, 0.01]).unwrap();

        let surface = depth.calculate(0.3, 0.0);
        assert!((surface - base.calculate(0.3, 0.0)).abs() < TOL);

        let buried = depth.calculate(0.3, 100.0);
        assert!((buried - surface * (-1.0_f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn test_rate_plugin_registry_defaults() {
        for plugin in rate_model_plugins() {
            let args = default_args(plugin.parameters);
            let model = (plugin.create)(&args).unwrap();
            let rate = model.calculate(0.5, 0.0);
            assert!(rate.is_finite() && rate > 0.0, "{} failed", plugin.name);
        }
    }

    #[test]
    fn test_rate_plugin_wrong_arity() {
        assert!(mack_rate_model(&[1.0]).is_err());
        assert!(notch_depth_rate_model(&[1.0, 2.0]).is_err());
    }
}
