use std::collections::BTreeMap;

use crate::config::CURRENCY_PREFIX;

/// How a slider value is shown next to its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Unit {
    Currency,
    Percent,
    Hours,
    Count,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub unit: Unit,
}

impl SliderSpec {
    /// Keeps `value` inside `[min, max]` and on the step grid starting at `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let bounded = value.clamp(self.min, self.max);
        if self.step <= 0.0 || bounded >= self.max {
            return bounded;
        }
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    pub fn format(&self, value: f64) -> String {
        match self.unit {
            Unit::Currency => format_currency(value),
            Unit::Percent => format!("{}%", group_thousands(value.round() as i64)),
            Unit::Hours => format!("{} hrs", group_thousands(value.round() as i64)),
            Unit::Count => group_thousands(value.round() as i64),
        }
    }
}

/// Slider values keyed by input id.
pub type SliderValues = BTreeMap<&'static str, f64>;

/// Manual-vs-automated revenue funnel: volume x periods x rate% x unit value.
#[derive(Clone, Debug, PartialEq)]
pub struct RevenueBasis {
    pub volume_input: &'static str,
    pub rate_input: &'static str,
    pub unit_value_input: &'static str,
    /// e.g. 26 working days per month for a daily volume
    pub periods: f64,
    /// Fractional lift the service claims, 0.35 for +35%
    pub uplift: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Weight {
    pub input: &'static str,
    pub per_unit: f64,
}

/// One parameterized calculator shared by every pricing page. Pages differ only in
/// their inputs, optional revenue funnel and weights table.
#[derive(Clone, Debug, PartialEq)]
pub struct RoiModel {
    pub inputs: Vec<SliderSpec>,
    pub basis: Option<RevenueBasis>,
    pub weights: Vec<Weight>,
    pub baseline_cost: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub manual_revenue: f64,
    pub automated_revenue: f64,
    pub revenue_lift: f64,
    pub weighted_value: f64,
    pub total_benefit: f64,
    pub raw_roi_percent: f64,
}

impl Projection {
    /// ROI as shown to visitors: whole percent, never below zero.
    pub fn display_roi(&self) -> i64 {
        self.raw_roi_percent.round().max(0.0) as i64
    }
}

impl RoiModel {
    pub fn spec(&self, id: &str) -> Option<&SliderSpec> {
        self.inputs.iter().find(|s| s.id == id)
    }

    pub fn defaults(&self) -> SliderValues {
        self.inputs.iter().map(|s| (s.id, s.default)).collect()
    }

    /// Updates one input through its slider bounds. Unknown ids leave the values untouched.
    pub fn set(&self, values: &mut SliderValues, id: &str, raw: f64) {
        if let Some(spec) = self.spec(id) {
            values.insert(spec.id, spec.clamp(raw));
        }
    }

    fn value(&self, values: &SliderValues, id: &str) -> f64 {
        match values.get(id) {
            Some(v) => *v,
            None => self.spec(id).map(|s| s.default).unwrap_or(0.0),
        }
    }

    pub fn project(&self, values: &SliderValues) -> Projection {
        let manual_revenue = match &self.basis {
            Some(basis) => {
                self.value(values, basis.volume_input)
                    * basis.periods
                    * (self.value(values, basis.rate_input) / 100.0)
                    * self.value(values, basis.unit_value_input)
            }
            None => 0.0,
        };
        let uplift = self.basis.as_ref().map(|b| b.uplift).unwrap_or(0.0);
        let automated_revenue = manual_revenue * (1.0 + uplift);
        let revenue_lift = automated_revenue - manual_revenue;

        let weighted_value: f64 = self
            .weights
            .iter()
            .map(|w| self.value(values, w.input) * w.per_unit)
            .sum();

        let total_benefit = revenue_lift + weighted_value;
        let raw_roi_percent = if self.baseline_cost > 0.0 {
            (total_benefit - self.baseline_cost) / self.baseline_cost * 100.0
        } else {
            0.0
        };

        Projection {
            manual_revenue,
            automated_revenue,
            revenue_lift,
            weighted_value,
            total_benefit,
            raw_roi_percent,
        }
    }
}

/// `RM 28,800` style: nearest whole unit with thousands separators.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-{} {}", CURRENCY_PREFIX, group_thousands(-rounded))
    } else {
        format!("{} {}", CURRENCY_PREFIX, group_thousands(rounded))
    }
}

pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn all_models() -> Vec<RoiModel> {
        vec![
            content::ai_automation_model(),
            content::app_development_model(),
            content::cloud_solutions_model(),
            content::data_analysis_model(),
            content::web_pricing_model(),
        ]
    }

    #[test]
    fn web_pricing_scenario_matches_quoted_numbers() {
        let model = content::web_pricing_model();
        let mut values = model.defaults();
        model.set(&mut values, "pages_built", 8.0);
        model.set(&mut values, "conversion_lift", 20.0);
        model.set(&mut values, "ops_hours", 30.0);

        let projection = model.project(&values);
        assert_eq!(projection.total_benefit, 28_800.0);
        assert_eq!(format_currency(projection.total_benefit), "RM 28,800");
        assert_eq!(projection.display_roi(), 476);
    }

    #[test]
    fn total_benefit_never_drops_when_one_input_grows() {
        for model in all_models() {
            for spec in &model.inputs {
                let mut values = model.defaults();
                let mut previous = f64::MIN;
                let mut v = spec.min;
                while v <= spec.max {
                    model.set(&mut values, spec.id, v);
                    let total = model.project(&values).total_benefit;
                    assert!(
                        total >= previous,
                        "{} decreased at {}={}",
                        spec.label,
                        spec.id,
                        v
                    );
                    previous = total;
                    v += spec.step;
                }
            }
        }
    }

    #[test]
    fn negative_roi_is_floored_at_zero() {
        let model = content::web_pricing_model();
        let mut values = model.defaults();
        model.set(&mut values, "pages_built", 1.0);
        model.set(&mut values, "conversion_lift", 0.0);
        model.set(&mut values, "ops_hours", 0.0);

        let projection = model.project(&values);
        assert!(projection.raw_roi_percent < 0.0);
        assert_eq!(projection.display_roi(), 0);
    }

    #[test]
    fn zero_baseline_cost_does_not_divide() {
        let mut model = content::web_pricing_model();
        model.baseline_cost = 0.0;
        let projection = model.project(&model.defaults());
        assert_eq!(projection.raw_roi_percent, 0.0);
        assert!(projection.total_benefit > 0.0);
    }

    #[test]
    fn lead_funnel_applies_uplift() {
        let model = content::ai_automation_model();
        let basis = model.basis.clone().unwrap();
        let mut values = model.defaults();
        model.set(&mut values, basis.volume_input, 20.0);
        model.set(&mut values, basis.rate_input, 10.0);
        model.set(&mut values, basis.unit_value_input, 1_000.0);

        let projection = model.project(&values);
        // 20 leads x 26 days x 10% x RM 1,000
        assert!((projection.manual_revenue - 52_000.0).abs() < 1e-6);
        assert!((projection.revenue_lift - 52_000.0 * basis.uplift).abs() < 1e-6);
        assert!(
            (projection.total_benefit - projection.revenue_lift - projection.weighted_value).abs()
                < 1e-6
        );
    }

    #[test]
    fn min_and_max_format_back_exactly() {
        for model in all_models() {
            for spec in &model.inputs {
                let mut values = model.defaults();
                model.set(&mut values, spec.id, spec.min);
                assert_eq!(spec.format(values[spec.id]), spec.format(spec.min));
                model.set(&mut values, spec.id, spec.max);
                assert_eq!(spec.format(values[spec.id]), spec.format(spec.max));
            }
        }
    }

    #[test]
    fn defaults_sit_inside_their_ranges() {
        for model in all_models() {
            for spec in &model.inputs {
                assert!(spec.step > 0.0, "{}", spec.id);
                assert!(spec.min <= spec.default && spec.default <= spec.max, "{}", spec.id);
                assert_eq!(spec.clamp(spec.default), spec.default, "{}", spec.id);
            }
            for weight in &model.weights {
                assert!(weight.per_unit > 0.0);
                assert!(model.spec(weight.input).is_some(), "{}", weight.input);
            }
        }
    }

    #[test]
    fn clamp_snaps_and_bounds() {
        let spec = SliderSpec {
            id: "x",
            label: "X",
            min: 5.0,
            max: 100.0,
            step: 5.0,
            default: 20.0,
            unit: Unit::Count,
        };
        assert_eq!(spec.clamp(-3.0), 5.0);
        assert_eq!(spec.clamp(12.0), 10.0);
        assert_eq!(spec.clamp(13.0), 15.0);
        assert_eq!(spec.clamp(1_000.0), 100.0);
        assert_eq!(spec.clamp(f64::NAN), 20.0);
    }

    #[test]
    fn unknown_input_is_ignored() {
        let model = content::web_pricing_model();
        let mut values = model.defaults();
        let before = values.clone();
        model.set(&mut values, "nope", 42.0);
        assert_eq!(values, before);
    }

    #[test]
    fn currency_and_units_format() {
        assert_eq!(format_currency(0.0), "RM 0");
        assert_eq!(format_currency(999.4), "RM 999");
        assert_eq!(format_currency(1_000.0), "RM 1,000");
        assert_eq!(format_currency(1_234_567.5), "RM 1,234,568");
        assert_eq!(format_currency(-4_999.0), "-RM 4,999");

        let pct = SliderSpec {
            id: "p",
            label: "P",
            min: 0.0,
            max: 100.0,
            step: 1.0,
            default: 20.0,
            unit: Unit::Percent,
        };
        assert_eq!(pct.format(20.0), "20%");
        let hrs = SliderSpec { unit: Unit::Hours, ..pct.clone() };
        assert_eq!(hrs.format(30.0), "30 hrs");
        let count = SliderSpec { unit: Unit::Count, ..pct };
        assert_eq!(count.format(12_000.0), "12,000");
    }
}
