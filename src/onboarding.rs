use std::collections::HashSet;

/// Simulated matching phase length and status rotation cadence.
pub const MATCHING_DURATION_MS: u32 = 3500;
pub const MATCHING_MESSAGE_INTERVAL_MS: u32 = 1000;

pub const MATCHING_MESSAGES: [&str; 4] = [
    "Scanning nearby gyms…",
    "Comparing training splits…",
    "Checking schedule overlap…",
    "Lining up your spotters…",
];

pub const GENDER_OPTIONS: [&str; 3] = ["female", "male", "nonbinary"];

pub const GOAL_OPTIONS: [&str; 4] = ["strength", "endurance", "weight-loss", "mobility"];

pub const VIBE_OPTIONS: [&str; 6] = [
    "early-bird",
    "night-owl",
    "music-loud",
    "quiet-focus",
    "competitive",
    "social",
];

/// Shared tag pool for the strengths and weaknesses pickers.
pub const TRAIT_OPTIONS: [&str; 6] = [
    "squat",
    "bench",
    "deadlift",
    "cardio",
    "consistency",
    "nutrition",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Welcome,
    GenderSelect,
    GoalSelect,
    VibeSelect,
    StrengthWeaknessSelect,
    Matching,
    Reveal,
    Complete,
}

impl OnboardingStep {
    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome to Spotter",
            OnboardingStep::GenderSelect => "How do you identify?",
            OnboardingStep::GoalSelect => "What are you training for?",
            OnboardingStep::VibeSelect => "Pick your gym vibe",
            OnboardingStep::StrengthWeaknessSelect => "Strengths and weak points",
            OnboardingStep::Matching => "Finding your people",
            OnboardingStep::Reveal => "It's a match",
            OnboardingStep::Complete => "You're all set",
        }
    }
}

/// Linear onboarding flow. Forward motion is gated per step; the only ways
/// backward are the explicit `back` affordance on the selection steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Onboarding {
    step: OnboardingStep,
    pub gender: Option<String>,
    pub goal: Option<String>,
    pub vibes: HashSet<String>,
    pub strengths: HashSet<String>,
    pub weaknesses: HashSet<String>,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            gender: None,
            goal: None,
            vibes: HashSet::new(),
            strengths: HashSet::new(),
            weaknesses: HashSet::new(),
        }
    }
}

impl Onboarding {
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Whether the "continue" affordance is live on the current step.
    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::Welcome => true,
            OnboardingStep::GenderSelect => self.gender.is_some(),
            OnboardingStep::GoalSelect => self.goal.is_some(),
            OnboardingStep::VibeSelect => !self.vibes.is_empty(),
            // Zero selections is a valid terminal count for this step.
            OnboardingStep::StrengthWeaknessSelect => true,
            // Matching resolves on its own timer, never by tapping.
            OnboardingStep::Matching => false,
            OnboardingStep::Reveal => true,
            OnboardingStep::Complete => false,
        }
    }

    /// Advance one step if the current step's guard holds. Returns whether
    /// the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }

        self.step = match self.step {
            OnboardingStep::Welcome => OnboardingStep::GenderSelect,
            OnboardingStep::GenderSelect => OnboardingStep::GoalSelect,
            OnboardingStep::GoalSelect => OnboardingStep::VibeSelect,
            OnboardingStep::VibeSelect => OnboardingStep::StrengthWeaknessSelect,
            OnboardingStep::StrengthWeaknessSelect => OnboardingStep::Matching,
            OnboardingStep::Reveal => OnboardingStep::Complete,
            OnboardingStep::Matching | OnboardingStep::Complete => self.step,
        };
        true
    }

    /// Step back within the selection stretch. Returns whether the step
    /// changed; there is no way back out of Matching or later.
    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            OnboardingStep::GenderSelect => OnboardingStep::Welcome,
            OnboardingStep::GoalSelect => OnboardingStep::GenderSelect,
            OnboardingStep::VibeSelect => OnboardingStep::GoalSelect,
            OnboardingStep::StrengthWeaknessSelect => OnboardingStep::VibeSelect,
            _ => return false,
        };
        self.step = previous;
        true
    }

    /// Skip straight to the end of the flow.
    pub fn skip(&mut self) {
        self.step = OnboardingStep::Complete;
    }

    /// Timer-driven resolution of the matching phase.
    pub fn finish_matching(&mut self) -> bool {
        if self.step != OnboardingStep::Matching {
            return false;
        }
        self.step = OnboardingStep::Reveal;
        true
    }

    pub fn select_gender(&mut self, id: &str) {
        self.gender = Some(id.to_string());
    }

    pub fn select_goal(&mut self, id: &str) {
        self.goal = Some(id.to_string());
    }

    pub fn toggle_vibe(&mut self, tag: &str) {
        if !self.vibes.remove(tag) {
            self.vibes.insert(tag.to_string());
        }
    }

    /// Adding a strength evicts the same tag from the weaknesses.
    pub fn toggle_strength(&mut self, tag: &str) {
        toggle_exclusive(&mut self.strengths, &mut self.weaknesses, tag);
    }

    /// Adding a weakness evicts the same tag from the strengths.
    pub fn toggle_weakness(&mut self, tag: &str) {
        toggle_exclusive(&mut self.weaknesses, &mut self.strengths, tag);
    }

    /// Status line shown during the matching phase; wraps over the fixed
    /// message list once per tick.
    pub fn matching_message(tick: u32) -> &'static str {
        MATCHING_MESSAGES[tick as usize % MATCHING_MESSAGES.len()]
    }
}

/// One symmetric toggle for the two mutually exclusive tag sets: re-toggling
/// removes the tag, adding it claims the tag from the opposite set.
fn toggle_exclusive(toggled: &mut HashSet<String>, opposite: &mut HashSet<String>, tag: &str) {
    if toggled.remove(tag) {
        return;
    }
    opposite.remove(tag);
    toggled.insert(tag.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_at(step: OnboardingStep) -> Onboarding {
        let mut flow = Onboarding::default();
        loop {
            if flow.step() == step {
                return flow;
            }
            match flow.step() {
                OnboardingStep::GenderSelect => flow.select_gender("female"),
                OnboardingStep::GoalSelect => flow.select_goal("strength"),
                OnboardingStep::VibeSelect => flow.toggle_vibe("social"),
                OnboardingStep::Matching => {
                    flow.finish_matching();
                    continue;
                }
                _ => {}
            }
            assert!(flow.advance(), "stuck at {:?}", flow.step());
        }
    }

    #[test]
    fn gender_step_gates_until_selection() {
        let mut flow = flow_at(OnboardingStep::GenderSelect);
        assert!(!flow.can_advance());
        assert!(!flow.advance());
        assert_eq!(flow.step(), OnboardingStep::GenderSelect);

        flow.select_gender("male");
        assert!(flow.advance());
        assert_eq!(flow.step(), OnboardingStep::GoalSelect);
    }

    #[test]
    fn vibe_step_needs_at_least_one_tag() {
        let mut flow = flow_at(OnboardingStep::VibeSelect);
        assert!(!flow.can_advance());
        flow.toggle_vibe("early-bird");
        assert!(flow.can_advance());
        flow.toggle_vibe("early-bird");
        assert!(!flow.can_advance());
    }

    #[test]
    fn trait_step_advances_with_zero_selections() {
        let mut flow = flow_at(OnboardingStep::StrengthWeaknessSelect);
        assert!(flow.strengths.is_empty() && flow.weaknesses.is_empty());
        assert!(flow.advance());
        assert_eq!(flow.step(), OnboardingStep::Matching);
    }

    #[test]
    fn matching_only_resolves_via_timer() {
        let mut flow = flow_at(OnboardingStep::Matching);
        assert!(!flow.advance());
        assert_eq!(flow.step(), OnboardingStep::Matching);
        assert!(flow.finish_matching());
        assert_eq!(flow.step(), OnboardingStep::Reveal);
        // A stale timer firing again is ignored.
        assert!(!flow.finish_matching());
    }

    #[test]
    fn reveal_continues_to_complete() {
        let mut flow = flow_at(OnboardingStep::Reveal);
        assert!(flow.advance());
        assert_eq!(flow.step(), OnboardingStep::Complete);
        assert!(!flow.advance());
    }

    #[test]
    fn back_walks_the_selection_stretch_only() {
        let mut flow = flow_at(OnboardingStep::StrengthWeaknessSelect);
        assert!(flow.back());
        assert_eq!(flow.step(), OnboardingStep::VibeSelect);
        assert!(flow.back());
        assert!(flow.back());
        assert!(flow.back());
        assert_eq!(flow.step(), OnboardingStep::Welcome);
        assert!(!flow.back());

        let mut matching = flow_at(OnboardingStep::Matching);
        assert!(!matching.back());
    }

    #[test]
    fn skip_jumps_to_complete() {
        let mut flow = flow_at(OnboardingStep::Welcome);
        flow.skip();
        assert_eq!(flow.step(), OnboardingStep::Complete);
    }

    #[test]
    fn strength_toggle_evicts_weakness() {
        let mut flow = Onboarding::default();
        flow.toggle_weakness("bench");
        flow.toggle_strength("bench");
        assert!(flow.strengths.contains("bench"));
        assert!(!flow.weaknesses.contains("bench"));
    }

    #[test]
    fn weakness_toggle_evicts_strength() {
        let mut flow = Onboarding::default();
        flow.toggle_strength("cardio");
        flow.toggle_weakness("cardio");
        assert!(flow.weaknesses.contains("cardio"));
        assert!(!flow.strengths.contains("cardio"));
    }

    #[test]
    fn retoggle_clears_without_crossing_over() {
        let mut flow = Onboarding::default();
        flow.toggle_strength("squat");
        flow.toggle_strength("squat");
        assert!(!flow.strengths.contains("squat"));
        assert!(!flow.weaknesses.contains("squat"));
    }

    #[test]
    fn trait_sets_stay_disjoint_under_any_sequence() {
        let mut flow = Onboarding::default();
        let moves = [
            ("squat", true),
            ("bench", false),
            ("squat", false),
            ("bench", true),
            ("cardio", true),
            ("cardio", false),
            ("squat", true),
            ("bench", false),
        ];
        for (tag, strength) in moves {
            if strength {
                flow.toggle_strength(tag);
            } else {
                flow.toggle_weakness(tag);
            }
            assert!(flow.strengths.is_disjoint(&flow.weaknesses));
        }
    }

    #[test]
    fn matching_messages_wrap_cyclically() {
        assert_eq!(Onboarding::matching_message(0), MATCHING_MESSAGES[0]);
        assert_eq!(Onboarding::matching_message(3), MATCHING_MESSAGES[3]);
        assert_eq!(Onboarding::matching_message(4), MATCHING_MESSAGES[0]);
        assert_eq!(Onboarding::matching_message(9), MATCHING_MESSAGES[1]);
    }
}
