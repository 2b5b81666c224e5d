//! Evaluation policy setup
//!
//! The three-step evaluate page: pick a setup mode, then browse presets or
//! the upload form.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluateView {
    #[default]
    Selection,
    Preset,
    Upload,
}

impl EvaluateView {
    pub fn title(self) -> &'static str {
        match self {
            EvaluateView::Selection => "How to Evaluate?",
            EvaluateView::Preset => "Select a Preset Policy",
            EvaluateView::Upload => "Upload Your Policy",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            EvaluateView::Selection => "Choose how you want to set up your evaluation policy.",
            EvaluateView::Preset => {
                "Choose from pre-configured evaluation policies optimized for different goals."
            }
            EvaluateView::Upload => {
                "Upload a PDF, Word, or TXT file to auto-extract evaluation criteria."
            }
        }
    }

    /// Where the back link leads: `None` means leave the page for the console
    pub fn back(self) -> Option<EvaluateView> {
        match self {
            EvaluateView::Selection => None,
            EvaluateView::Preset | EvaluateView::Upload => Some(EvaluateView::Selection),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFocus {
    Balanced,
    Safety,
    Performance,
    Governance,
}

impl PolicyFocus {
    pub fn label(self) -> &'static str {
        match self {
            PolicyFocus::Balanced => "Balanced",
            PolicyFocus::Safety => "Safety",
            PolicyFocus::Performance => "Performance",
            PolicyFocus::Governance => "Governance",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PolicyFocus::Balanced => "#FACC15",
            PolicyFocus::Safety => "#F97316",
            PolicyFocus::Performance => "#22D3EE",
            PolicyFocus::Governance => "#A855F7",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyPreset {
    pub title: &'static str,
    pub focus: PolicyFocus,
    pub description: &'static str,
    pub criteria: &'static [&'static str],
}

pub const POLICY_PRESETS: [PolicyPreset; 4] = [
    PolicyPreset {
        title: "Balanced Policy",
        focus: PolicyFocus::Balanced,
        description: "Standard criteria for general-purpose model evaluation.",
        criteria: &["MMLU Score", "Refusal Rate", "Context Window"],
    },
    PolicyPreset {
        title: "Safety-First Policy",
        focus: PolicyFocus::Safety,
        description: "Emphasizes safety and responsible AI principles.",
        criteria: &["Refusal Rate", "Jailbreak Rate", "Toxicity Score"],
    },
    PolicyPreset {
        title: "Performance-Max Policy",
        focus: PolicyFocus::Performance,
        description: "Focuses on raw capability and benchmark scores.",
        criteria: &["MMLU Score", "Code Gen Score", "Latency"],
    },
    PolicyPreset {
        title: "Governance Policy",
        focus: PolicyFocus::Governance,
        description: "Ensures regulatory and compliance requirements.",
        criteria: &["Audit Status", "Data Recency", "Transparency"],
    },
];

/// Largest policy document the upload form accepts
pub const MAX_UPLOAD_MB: u32 = 10;
