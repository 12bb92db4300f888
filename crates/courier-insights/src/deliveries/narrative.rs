use serde::Serialize;

/// Static copy shown around the charts. The figures quoted here were
/// computed offline and are not derived from the loaded table.
#[derive(Debug, Clone, Serialize)]
pub struct Narrative {
    pub title: &'static str,
    pub credit: &'static str,
    pub preview: &'static str,
    pub summary: &'static str,
    pub findings: &'static [&'static str],
    pub recommendations: &'static [Recommendation],
    pub code_reference: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub heading: &'static str,
    pub detail: &'static str,
}

const FINDINGS: &[&str] = &[
    "Clear weather yields the fastest deliveries, lowest median and tight spread.",
    "Snowy conditions show the highest median and widest spread, meaning delays are common and unpredictable.",
    "High traffic increases both median and variability.",
    "Night deliveries have a slightly lower median (~60 mins), possibly due to less traffic and fewer orders.",
    "Scooters and Bike have similar median time, but Scooters have tightest spread means they're fast and consistent.",
];

const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        heading: "Optimize for Short-Distance Deliveries",
        detail: "Prioritize routing and batching nearby orders. Consider dynamic pricing to encourage short-distance requests.",
    },
    Recommendation {
        heading: "Streamline Preparation Time",
        detail: "Improve kitchen workflows, automate order prep alerts, and pre-batch high-frequency items.",
    },
    Recommendation {
        heading: "Deploy Scooters Strategically",
        detail: "Assign scooters to high-density zones or time-sensitive deliveries, especially during peak hours.",
    },
];

pub fn narrative() -> Narrative {
    Narrative {
        title: "Courier Delivery Time Analysis",
        credit: "Created by Intan Nur Robi Annisa, student of Data Science and Data Analyst Bootcamp at Dibimbing. LinkedIn Profile: https://www.linkedin.com/in/intannurrobiannisa",
        preview: "Analyzing food delivery times is essential to provide accurate estimates, manage customer expectations, and reduce frustration.",
        summary: "The data reveals that delivery time is most strongly influenced by distance, with a correlation of 0.78, making it the dominant factor. \
Clear weather and low traffic consistently lead to faster deliveries, while snowy conditions and high traffic significantly increase delays. \
Scooters emerge as the most efficient vehicle type, showing the lowest and most consistent delivery times. \
Night deliveries tend to be slightly quicker than other times of day, and courier experience shows a modest impact: performance improves gradually, peaking around year two. \
Overall, delivery times are relatively stable, ranging between 53 and 61 minutes, suggesting a well-controlled operational environment with a few key levers for optimization.",
        findings: FINDINGS,
        recommendations: RECOMMENDATIONS,
        code_reference: "https://github.com/intanurobiannisa/delivery-time-dashboard/",
    }
}
