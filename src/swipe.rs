/// Horizontal displacement past which a release commits the card.
pub const SWIPE_THRESHOLD: f64 = 120.0;

/// Card tilt at the edge of the clamped drag domain, in degrees.
pub const MAX_ROTATION_DEG: f64 = 10.0;

/// One in-progress drag. Only the pointer that started the drag is tracked;
/// events from any other pointer id are ignored by the callers.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub pointer_id: i32,
    pub start_x: f64,
    pub start_y: f64,
    pub current_x: f64,
    pub current_y: f64,
}

impl DragState {
    pub fn begin(pointer_id: i32, x: f64, y: f64) -> Self {
        Self {
            pointer_id,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.current_x = x;
        self.current_y = y;
    }

    pub fn dx(&self) -> f64 {
        self.current_x - self.start_x
    }

    pub fn dy(&self) -> f64 {
        self.current_y - self.start_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Accept,
    Reject,
    Cancel,
}

/// Classify a release by horizontal displacement alone. Threshold values
/// themselves snap back: the card must travel strictly past the threshold.
pub fn classify_release(dx: f64) -> SwipeOutcome {
    if dx > SWIPE_THRESHOLD {
        SwipeOutcome::Accept
    } else if dx < -SWIPE_THRESHOLD {
        SwipeOutcome::Reject
    } else {
        SwipeOutcome::Cancel
    }
}

/// Visual state of the top card for a given horizontal displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub rotation_deg: f64,
    pub accept_opacity: f64,
    pub reject_opacity: f64,
}

/// Map displacement to tilt and indicator opacities. The domain is clamped to
/// `[-half_width, +half_width]`; both indicators are fully transparent at rest
/// and reach full opacity at their own edge of the domain.
pub fn card_transform(dx: f64, half_width: f64) -> CardTransform {
    let half_width = half_width.max(1.0);
    let normalized = (dx / half_width).clamp(-1.0, 1.0);

    CardTransform {
        rotation_deg: normalized * MAX_ROTATION_DEG,
        accept_opacity: normalized.max(0.0),
        reject_opacity: (-normalized).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_past_threshold_accepts() {
        assert_eq!(classify_release(120.1), SwipeOutcome::Accept);
        assert_eq!(classify_release(400.0), SwipeOutcome::Accept);
    }

    #[test]
    fn release_past_negative_threshold_rejects() {
        assert_eq!(classify_release(-120.1), SwipeOutcome::Reject);
        assert_eq!(classify_release(-400.0), SwipeOutcome::Reject);
    }

    #[test]
    fn release_at_or_inside_threshold_cancels() {
        assert_eq!(classify_release(SWIPE_THRESHOLD), SwipeOutcome::Cancel);
        assert_eq!(classify_release(-SWIPE_THRESHOLD), SwipeOutcome::Cancel);
        assert_eq!(classify_release(0.0), SwipeOutcome::Cancel);
        assert_eq!(classify_release(64.0), SwipeOutcome::Cancel);
    }

    #[test]
    fn drag_reports_cumulative_displacement() {
        let mut drag = DragState::begin(7, 100.0, 50.0);
        drag.update(160.0, 20.0);
        assert_eq!(drag.dx(), 60.0);
        assert_eq!(drag.dy(), -30.0);
    }

    #[test]
    fn rotation_is_monotone_and_zero_at_rest() {
        let half = 180.0;
        let mut previous = f64::NEG_INFINITY;
        for step in -20..=20 {
            let dx = f64::from(step) * 20.0;
            let rotation = card_transform(dx, half).rotation_deg;
            assert!(rotation >= previous);
            previous = rotation;
        }
        assert_eq!(card_transform(0.0, half).rotation_deg, 0.0);
        assert_eq!(card_transform(half, half).rotation_deg, MAX_ROTATION_DEG);
        assert_eq!(card_transform(-half, half).rotation_deg, -MAX_ROTATION_DEG);
    }

    #[test]
    fn rotation_clamps_outside_domain() {
        let half = 180.0;
        assert_eq!(card_transform(half * 3.0, half).rotation_deg, MAX_ROTATION_DEG);
        assert_eq!(
            card_transform(-half * 3.0, half).rotation_deg,
            -MAX_ROTATION_DEG
        );
    }

    #[test]
    fn indicator_opacities_mirror() {
        let half = 180.0;

        let rest = card_transform(0.0, half);
        assert_eq!(rest.accept_opacity, 0.0);
        assert_eq!(rest.reject_opacity, 0.0);

        let rightward = card_transform(90.0, half);
        assert_eq!(rightward.accept_opacity, 0.5);
        assert_eq!(rightward.reject_opacity, 0.0);

        let leftward = card_transform(-90.0, half);
        assert_eq!(leftward.accept_opacity, 0.0);
        assert_eq!(leftward.reject_opacity, 0.5);

        let far_right = card_transform(half, half);
        assert_eq!(far_right.accept_opacity, 1.0);
    }
}
