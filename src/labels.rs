//! Static label and color tables
//!
//! Pure lookups from priorities, assessments and category positions to
//! display text and color tags. The same input always yields the same output.

use crate::engine::{DeadlineManagement, Productivity, Workload};
use crate::settings::Language;
use crate::task::Priority;

/// Rotating palette for category bars
pub const CATEGORY_PALETTE: [&str; 6] = ["blue", "purple", "pink", "indigo", "teal", "orange"];

/// Severity color tag of a priority
pub fn priority_color(priority: &Priority) -> &'static str {
    match priority {
        Priority::High => "red",
        Priority::Medium => "yellow",
        Priority::Low => "green",
        Priority::Unknown(_) => "gray",
    }
}

/// Display label of a priority; unknown priorities show their raw value
pub fn priority_label(priority: &Priority, language: Language) -> &str {
    match (priority, language) {
        (Priority::High, Language::fr) => "Haute",
        (Priority::Medium, Language::fr) => "Moyenne",
        (Priority::Low, Language::fr) => "Basse",
        (Priority::High, Language::en) => "High",
        (Priority::Medium, Language::en) => "Medium",
        (Priority::Low, Language::en) => "Low",
        (Priority::High, Language::es) => "Alta",
        (Priority::Medium, Language::es) => "Media",
        (Priority::Low, Language::es) => "Baja",
        (Priority::Unknown(raw), _) => raw,
    }
}

/// Color tag of the category at `index` in the breakdown, wrapping around the palette
pub fn category_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Category given to tasks created without one
pub fn default_category(language: Language) -> &'static str {
    match language {
        Language::fr => "Général",
        Language::en | Language::es => "General",
    }
}

pub fn status_label(completed: bool, language: Language) -> &'static str {
    match (completed, language) {
        (true, Language::fr) => "Terminée",
        (false, Language::fr) => "En cours",
        (true, Language::en) => "Completed",
        (false, Language::en) => "Pending",
        (true, Language::es) => "Completada",
        (false, Language::es) => "Pendiente",
    }
}

pub fn productivity_label(productivity: Productivity, language: Language) -> &'static str {
    match (productivity, language) {
        (Productivity::High, Language::fr) => "Excellente",
        (Productivity::Medium, Language::fr) => "Bonne",
        (Productivity::Low, Language::fr) => "À améliorer",
        (Productivity::High, Language::en) => "Excellent",
        (Productivity::Medium, Language::en) => "Good",
        (Productivity::Low, Language::en) => "Needs improvement",
        (Productivity::High, Language::es) => "Excelente",
        (Productivity::Medium, Language::es) => "Buena",
        (Productivity::Low, Language::es) => "A mejorar",
    }
}

pub fn deadline_label(deadlines: DeadlineManagement, language: Language) -> &'static str {
    match (deadlines, language) {
        (DeadlineManagement::Good, Language::fr) => "Parfaite",
        (DeadlineManagement::Fair, Language::fr) => "Correcte",
        (DeadlineManagement::Poor, Language::fr) => "À améliorer",
        (DeadlineManagement::Good, Language::en) => "Perfect",
        (DeadlineManagement::Fair, Language::en) => "Fair",
        (DeadlineManagement::Poor, Language::en) => "Needs improvement",
        (DeadlineManagement::Good, Language::es) => "Perfecta",
        (DeadlineManagement::Fair, Language::es) => "Correcta",
        (DeadlineManagement::Poor, Language::es) => "A mejorar",
    }
}

pub fn workload_label(workload: Workload, language: Language) -> &'static str {
    match (workload, language) {
        (Workload::Light, Language::fr) => "Légère",
        (Workload::Moderate, Language::fr) => "Modérée",
        (Workload::Heavy, Language::fr) => "Élevée",
        (Workload::Light, Language::en) => "Light",
        (Workload::Moderate, Language::en) => "Moderate",
        (Workload::Heavy, Language::en) => "Heavy",
        (Workload::Light, Language::es) => "Ligera",
        (Workload::Moderate, Language::es) => "Moderada",
        (Workload::Heavy, Language::es) => "Elevada",
    }
}
