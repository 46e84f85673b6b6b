use serde::{Deserialize, Serialize};

use crate::answers::SurveyAnswer;
use crate::scoring::{Category, ImpactCategory};

/// Most tips returned for one submission.
pub const MAX_TIPS: usize = 3;

/// A canned footprint reduction suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Expected size of the reduction.
    pub impact: ImpactCategory,
    pub reasoning: String,
}

struct Rule {
    key: &'static str,
    triggers: &'static [&'static str],
    title: &'static str,
    description: &'static str,
    category: Category,
    impact: ImpactCategory,
    reasoning: &'static str,
}

impl Rule {
    fn matches(&self, answers: &SurveyAnswer) -> bool {
        answers
            .text(self.key)
            .map_or(false, |value| self.triggers.contains(&value))
    }

    fn tip(&self) -> Tip {
        Tip {
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            impact: self.impact,
            reasoning: self.reasoning.to_string(),
        }
    }
}

const RULES: &[Rule] = &[
    Rule {
        key: "transportationType",
        triggers: &["car-gasoline", "car-diesel"],
        title: "Switch to Electric or Hybrid Vehicle",
        description: "Consider upgrading to an electric or hybrid vehicle for your next car purchase. This can reduce your transportation emissions by up to 60%.",
        category: Category::Transportation,
        impact: ImpactCategory::High,
        reasoning: "Transportation is one of the largest sources of personal carbon emissions. Electric vehicles produce zero direct emissions and are becoming more affordable and accessible.",
    },
    Rule {
        key: "electricityUnits",
        triggers: &["high", "very-high"],
        title: "Upgrade to Energy-Efficient Appliances",
        description: "Replace old appliances with ENERGY STAR certified models and switch to LED lighting throughout your home.",
        category: Category::Energy,
        impact: ImpactCategory::Medium,
        reasoning: "Energy-efficient appliances can reduce your electricity consumption by 20-30%, significantly lowering your carbon footprint and energy bills.",
    },
    Rule {
        key: "dietType",
        triggers: &["omnivore", "high-meat"],
        title: "Adopt Meatless Mondays",
        description: "Try going meat-free one day per week. This simple change can reduce your dietary carbon footprint by 15%.",
        category: Category::Diet,
        impact: ImpactCategory::Medium,
        reasoning: "Livestock farming produces significant greenhouse gases. Reducing meat consumption even slightly can have a meaningful environmental impact.",
    },
    Rule {
        key: "airTravelFreq",
        triggers: &["frequently", "very-frequently"],
        title: "Offset Your Flight Emissions",
        description: "Consider purchasing carbon offsets for your flights and explore alternative transportation for shorter trips.",
        category: Category::Travel,
        impact: ImpactCategory::High,
        reasoning: "Air travel has a very high carbon intensity. Offsetting flights and reducing unnecessary air travel can significantly reduce your overall footprint.",
    },
    Rule {
        key: "recyclingHabits",
        triggers: &["rarely", "never"],
        title: "Improve Recycling Habits",
        description: "Set up a proper recycling system at home and learn about your local recycling guidelines to maximize waste diversion.",
        category: Category::Waste,
        impact: ImpactCategory::Low,
        reasoning: "Proper recycling reduces the need for new materials and prevents waste from going to landfills, where it produces methane.",
    },
];

fn default_tips() -> Vec<Tip> {
    vec![
        Tip {
            title: "Use a Programmable Thermostat".to_string(),
            description: "Install a programmable thermostat to optimize your heating and cooling usage, potentially saving 10% on energy costs.".to_string(),
            category: Category::Energy,
            impact: ImpactCategory::Medium,
            reasoning: "Heating and cooling account for nearly half of home energy use. Smart temperature control can significantly reduce energy waste.".to_string(),
        },
        Tip {
            title: "Choose Sustainable Transportation".to_string(),
            description: "Walk, bike, or use public transportation for short trips instead of driving when possible.".to_string(),
            category: Category::Transportation,
            impact: ImpactCategory::Medium,
            reasoning: "Short car trips are often the least efficient and can easily be replaced with more sustainable alternatives.".to_string(),
        },
    ]
}

/// Picks up to [`MAX_TIPS`] tips for the answers, in rule order.
///
/// Answers that trigger no rule get general advice instead.
pub fn generate_tips(answers: &SurveyAnswer) -> Vec<Tip> {
    let tips = RULES
        .iter()
        .filter(|rule| rule.matches(answers))
        .take(MAX_TIPS)
        .map(Rule::tip)
        .collect::<Vec<Tip>>();
    if tips.is_empty() {
        default_tips()
    } else {
        tips
    }
}
