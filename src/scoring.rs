use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answers::{AnswerValue, SurveyAnswer};
use crate::tables::{self, WeightTable};

/// Totals below this are `Low`.
pub const LOW_THRESHOLD: f64 = 300.0;
/// Totals at or above this are `High`.
pub const HIGH_THRESHOLD: f64 = 600.0;

/// Lifestyle dimension contributing independently to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Transportation,
    Energy,
    Water,
    Diet,
    FoodWaste,
    Shopping,
    Waste,
    Electronics,
    Travel,
    #[serde(rename = "appliance")]
    Appliances,
    Home,
    Heating,
    #[serde(rename = "digital")]
    DigitalDevices,
    Pets,
    Garden,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Transportation,
        Category::Energy,
        Category::Water,
        Category::Diet,
        Category::FoodWaste,
        Category::Shopping,
        Category::Waste,
        Category::Electronics,
        Category::Travel,
        Category::Appliances,
        Category::Home,
        Category::Heating,
        Category::DigitalDevices,
        Category::Pets,
        Category::Garden,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Energy => "Energy",
            Category::Water => "Water",
            Category::Diet => "Diet",
            Category::FoodWaste => "Food Waste",
            Category::Shopping => "Shopping",
            Category::Waste => "Waste",
            Category::Electronics => "Electronics",
            Category::Travel => "Travel",
            Category::Appliances => "Appliances",
            Category::Home => "Home",
            Category::Heating => "Heating",
            Category::DigitalDevices => "Digital Devices",
            Category::Pets => "Pets",
            Category::Garden => "Garden",
        }
    }

    /// Weight table holding the category's primary answer.
    pub fn table(&self) -> &'static WeightTable {
        match self {
            Category::Transportation => &tables::TRANSPORTATION,
            Category::Energy => &tables::ENERGY,
            Category::Water => &tables::WATER,
            Category::Diet => &tables::DIET,
            Category::FoodWaste => &tables::FOOD_WASTE,
            Category::Shopping => &tables::SHOPPING,
            Category::Waste => &tables::WASTE,
            Category::Electronics => &tables::ELECTRONICS,
            Category::Travel => &tables::TRAVEL,
            Category::Appliances => &tables::APPLIANCES,
            Category::Home => &tables::HOME,
            Category::Heating => &tables::HEATING,
            Category::DigitalDevices => &tables::DIGITAL_DEVICES,
            Category::Pets => &tables::PETS,
            Category::Garden => &tables::GARDEN,
        }
    }

    /// Answer key of the category's primary question.
    pub fn input_key(&self) -> &'static str {
        self.table().key
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-tier classification of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactCategory {
    Low,
    Medium,
    High,
}

impl ImpactCategory {
    /// Lower bound of every band is inclusive.
    pub fn classify(total: f64) -> Self {
        match total {
            total if total < LOW_THRESHOLD => ImpactCategory::Low,
            total if total < HIGH_THRESHOLD => ImpactCategory::Medium,
            _ => ImpactCategory::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCategory::Low => "Low",
            ImpactCategory::Medium => "Medium",
            ImpactCategory::High => "High",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// kg CO2e per category; every category is present.
    pub scores: BTreeMap<Category, f64>,
    pub total_score: f64,
    pub impact_category: ImpactCategory,
}

impl ScoreResult {
    pub fn score(&self, category: Category) -> f64 {
        self.scores.get(&category).copied().unwrap_or(0.0)
    }
}

/// Scores one survey submission.
///
/// Never fails: missing answers contribute nothing, unknown tokens take the
/// table default. Transportation needs all three of its answers and scores
/// 0 otherwise.
pub fn calculate_carbon_score(answers: &SurveyAnswer) -> ScoreResult {
    let scores = Category::ALL
        .iter()
        .map(|&category| (category, category_score(category, answers)))
        .collect::<BTreeMap<Category, f64>>();
    let total_score = scores.values().sum::<f64>();
    let impact_category = ImpactCategory::classify(total_score);
    tracing::debug!(
        answers = answers.len(),
        total_score,
        impact = %impact_category,
        "calculated carbon score"
    );
    ScoreResult {
        scores,
        total_score,
        impact_category,
    }
}

fn category_score(category: Category, answers: &SurveyAnswer) -> f64 {
    match category {
        Category::Transportation => transportation_score(answers),
        Category::Energy => match lookup(&tables::ENERGY, answers) {
            Some(score) if answers.flag(tables::RENEWABLE_ENERGY_KEY) => {
                score * tables::RENEWABLE_ENERGY_FACTOR
            }
            Some(score) => score,
            None => 0.0,
        },
        category => lookup(category.table(), answers).unwrap_or(0.0),
    }
}

fn transportation_score(answers: &SurveyAnswer) -> f64 {
    match (
        lookup(&tables::TRANSPORTATION, answers),
        lookup(&tables::TRANSPORTATION_FREQUENCY, answers),
        lookup(&tables::TRANSPORTATION_DISTANCE, answers),
    ) {
        (Some(base), Some(frequency), Some(distance)) => base * frequency * distance,
        _ => 0.0,
    }
}

/// Weight of the answer stored under the table's key, `None` when unanswered.
///
/// Blank text is unanswered. A yes/no flag under a select key is an unknown
/// token and takes the table default.
fn lookup(table: &WeightTable, answers: &SurveyAnswer) -> Option<f64> {
    let token = match answers.get(table.key)? {
        AnswerValue::Text(token) if token.is_empty() => return None,
        AnswerValue::Text(token) => Some(token.as_str()),
        AnswerValue::Flag(_) => None,
    };
    match token.and_then(|token| table.lookup(token)) {
        Some(weight) => Some(weight),
        None => {
            tracing::trace!(
                key = table.key,
                ?token,
                default = table.default,
                "unknown answer token"
            );
            Some(table.default)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn single(key: &str, value: &str) -> ScoreResult {
        calculate_carbon_score(&SurveyAnswer::new().with(key, value))
    }

    #[test]
    fn test_empty_answers() {
        let result = calculate_carbon_score(&SurveyAnswer::new());
        assert_eq!(result.scores.len(), 15);
        assert!(result.scores.values().all(|&score| score == 0.0));
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.impact_category, ImpactCategory::Low);
    }

    #[test]
    fn test_vegan_only() {
        let result = single("dietType", "vegan");
        assert_eq!(result.score(Category::Diet), 20.0);
        assert!(Category::ALL
            .iter()
            .filter(|&&category| category != Category::Diet)
            .all(|&category| result.score(category) == 0.0));
        assert_eq!(result.total_score, 20.0);
        assert_eq!(result.impact_category, ImpactCategory::Low);
    }

    #[test]
    fn test_very_frequent_flyer() {
        let result = single("airTravelFreq", "very-frequently");
        assert_eq!(result.score(Category::Travel), 500.0);
        assert_eq!(result.total_score, 500.0);
        assert_eq!(result.impact_category, ImpactCategory::Medium);
    }

    #[test]
    fn test_every_table_entry_alone() {
        for category in Category::ALL
            .iter()
            .filter(|&&category| category != Category::Transportation)
        {
            let table = category.table();
            for &(token, weight) in table.entries {
                let result = single(table.key, token);
                assert_eq!(result.score(*category), weight, "{} {}", table.key, token);
                assert_eq!(result.total_score, weight, "{} {}", table.key, token);
            }
        }
    }

    #[test]
    fn test_every_transport_entry() {
        let (base, frequency, distance) = (
            tables::TRANSPORTATION,
            tables::TRANSPORTATION_FREQUENCY,
            tables::TRANSPORTATION_DISTANCE,
        );
        let score = |t: &str, f: &str, d: &str| {
            let answers = SurveyAnswer::new()
                .with(base.key, t)
                .with(frequency.key, f)
                .with(distance.key, d);
            calculate_carbon_score(&answers).score(Category::Transportation)
        };
        for &(token, weight) in base.entries {
            assert_eq!(score(token, "daily", "medium"), weight * 1.0 * 1.0, "{}", token);
        }
        for &(token, multiplier) in frequency.entries {
            assert_eq!(
                score("car-gasoline", token, "medium"),
                120.0 * multiplier * 1.0,
                "{}",
                token
            );
        }
        for &(token, multiplier) in distance.entries {
            assert_eq!(
                score("car-gasoline", "daily", token),
                120.0 * 1.0 * multiplier,
                "{}",
                token
            );
        }
    }

    #[test]
    fn test_blank_answer_is_unanswered() {
        for category in Category::ALL {
            let result = single(category.input_key(), "");
            assert_eq!(result.score(category), 0.0, "{}", category.input_key());
            assert_eq!(result.total_score, 0.0);
        }
        let blank_type = SurveyAnswer::new()
            .with("transportationType", "")
            .with("transportationFrequency", "daily")
            .with("transportationDistance", "long");
        assert_eq!(
            calculate_carbon_score(&blank_type).score(Category::Transportation),
            0.0
        );
        let blank_distance = SurveyAnswer::new()
            .with("transportationType", "car-gasoline")
            .with("transportationFrequency", "daily")
            .with("transportationDistance", "");
        assert_eq!(
            calculate_carbon_score(&blank_distance).score(Category::Transportation),
            0.0
        );
    }

    #[test]
    fn test_flag_under_select_key_uses_default() {
        let result = calculate_carbon_score(&SurveyAnswer::new().with("dietType", true));
        assert_eq!(result.score(Category::Diet), 80.0);

        let result = calculate_carbon_score(&SurveyAnswer::new().with("electricityUnits", false));
        assert_eq!(result.score(Category::Energy), 80.0);

        let answers = SurveyAnswer::new()
            .with("transportationType", "bicycle")
            .with("transportationFrequency", true)
            .with("transportationDistance", "short");
        assert_eq!(
            calculate_carbon_score(&answers).score(Category::Transportation),
            5.0 * 0.5 * 0.5
        );
    }

    #[test]
    fn test_unknown_token_uses_default() {
        for category in Category::ALL
            .iter()
            .filter(|&&category| category != Category::Transportation)
        {
            let table = category.table();
            let result = single(table.key, "not-an-option");
            assert_eq!(result.score(*category), table.default, "{}", table.key);
        }
    }

    #[test]
    fn test_transportation() {
        let answers = SurveyAnswer::new()
            .with("transportationType", "car-gasoline")
            .with("transportationFrequency", "daily")
            .with("transportationDistance", "long");
        let result = calculate_carbon_score(&answers);
        assert_eq!(result.score(Category::Transportation), 180.0);
        assert_eq!(result.total_score, 180.0);
    }

    #[test]
    fn test_transportation_defaults() {
        let answers = SurveyAnswer::new()
            .with("transportationType", "hovercraft")
            .with("transportationFrequency", "sometimes")
            .with("transportationDistance", "far");
        let result = calculate_carbon_score(&answers);
        assert_eq!(result.score(Category::Transportation), 60.0 * 0.5 * 1.0);
    }

    #[test]
    fn test_transportation_requires_all_three() {
        let full = [
            ("transportationType", "car-diesel"),
            ("transportationFrequency", "weekly"),
            ("transportationDistance", "very-long"),
        ];
        for missing in 0..full.len() {
            let mut answers = SurveyAnswer::new();
            for (index, (key, value)) in full.iter().enumerate() {
                if index != missing {
                    answers.insert(*key, *value);
                }
            }
            let result = calculate_carbon_score(&answers);
            assert_eq!(result.score(Category::Transportation), 0.0);
            assert_eq!(result.total_score, 0.0);
        }
    }

    #[test]
    fn test_walking_scores_zero() {
        let answers = SurveyAnswer::new()
            .with("transportationType", "walking")
            .with("transportationFrequency", "daily")
            .with("transportationDistance", "short");
        assert_eq!(
            calculate_carbon_score(&answers).score(Category::Transportation),
            0.0
        );
    }

    #[test]
    fn test_renewable_energy() {
        let base = calculate_carbon_score(&SurveyAnswer::new().with("electricityUnits", "high"));
        assert_eq!(base.score(Category::Energy), 120.0);

        let renewable = calculate_carbon_score(
            &SurveyAnswer::new()
                .with("electricityUnits", "high")
                .with("renewableEnergy", true),
        );
        assert_eq!(renewable.score(Category::Energy), 120.0 * 0.3);

        let radio = calculate_carbon_score(
            &SurveyAnswer::new()
                .with("electricityUnits", "high")
                .with("renewableEnergy", "true"),
        );
        assert_eq!(radio.score(Category::Energy), 120.0 * 0.3);

        let declined = calculate_carbon_score(
            &SurveyAnswer::new()
                .with("electricityUnits", "high")
                .with("renewableEnergy", "false"),
        );
        assert_eq!(declined.score(Category::Energy), 120.0);
    }

    #[test]
    fn test_renewable_energy_without_usage() {
        let result = calculate_carbon_score(&SurveyAnswer::new().with("renewableEnergy", true));
        assert_eq!(result.score(Category::Energy), 0.0);
    }

    #[test]
    fn test_garden_reduces_total() {
        let answers = SurveyAnswer::new()
            .with("dietType", "omnivore")
            .with("gardenPractices", "sustainable");
        let result = calculate_carbon_score(&answers);
        assert_eq!(result.score(Category::Garden), -20.0);
        assert_eq!(result.total_score, 60.0);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let answers = SurveyAnswer::new()
            .with("transportationType", "motorcycle")
            .with("transportationFrequency", "monthly")
            .with("transportationDistance", "medium")
            .with("electricityUnits", "very-high")
            .with("renewableEnergy", true)
            .with("waterUsage", "high")
            .with("dietType", "high-meat")
            .with("foodWasteLevel", "some")
            .with("clothesPerMonth", "6-10")
            .with("recyclingHabits", "never")
            .with("streamingHabits", "very-high")
            .with("airTravelFreq", "occasionally")
            .with("applianceUsage", "high")
            .with("homeSize", "4+")
            .with("heatingType", "oil")
            .with("digitalDevices", "10+")
            .with("petOwnership", "multiple")
            .with("gardenPractices", "composting");
        let result = calculate_carbon_score(&answers);
        let expected = 80.0 * 0.3 * 1.0
            + 160.0 * 0.3
            + 60.0
            + 120.0
            + 25.0
            + 50.0
            + 60.0
            + 50.0
            + 150.0
            + 60.0
            + 80.0
            + 70.0
            + 60.0
            + 50.0
            - 15.0;
        assert!((result.total_score - expected).abs() < 1e-9);
        assert_eq!(result.total_score, result.scores.values().sum::<f64>());
        assert_eq!(result.impact_category, ImpactCategory::High);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let answers = SurveyAnswer::new()
            .with("meatIntakeFreq", "daily")
            .with("wasteDisposal", "landfill");
        assert_eq!(calculate_carbon_score(&answers).total_score, 0.0);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ImpactCategory::classify(-20.0), ImpactCategory::Low);
        assert_eq!(ImpactCategory::classify(299.999), ImpactCategory::Low);
        assert_eq!(ImpactCategory::classify(300.0), ImpactCategory::Medium);
        assert_eq!(ImpactCategory::classify(599.999), ImpactCategory::Medium);
        assert_eq!(ImpactCategory::classify(600.0), ImpactCategory::High);
    }

    #[test]
    fn test_serialize() {
        let result = single("foodWasteLevel", "high");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scores"]["foodWaste"], 60.0);
        assert_eq!(json["scores"]["digital"], 0.0);
        assert_eq!(json["scores"]["appliance"], 0.0);
        assert_eq!(json["totalScore"], 60.0);
        assert_eq!(json["impactCategory"], "Low");
    }
}
