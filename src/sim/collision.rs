//! Landing detection and response
//!
//! Only vertical landings matter: a falling doodler whose feet pass through
//! a platform's top this tick is snapped onto it. The lower bound of the
//! test is stretched by the current fall speed so fast falls can't skip a
//! thin platform between frames.

use super::field::PlatformField;
use super::state::{Doodler, Platform, PlatformId, ScoreTracker};

/// Result of a successful landing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub platform: PlatformId,
    /// First landing on this platform
    pub credited: bool,
}

/// Whether a falling doodler lands on `platform` this tick
pub fn is_landing(doodler: &Doodler, platform: &Platform) -> bool {
    if !doodler.is_falling() {
        return false;
    }
    let overlaps_x =
        doodler.pos.x + doodler.size().x > platform.left() && doodler.pos.x < platform.right();
    let feet = doodler.bottom();
    let reach = platform.top() + platform.size.y + doodler.vel.y;
    overlaps_x && feet > platform.top() && feet < reach
}

/// First platform in collection order the doodler lands on
pub fn find_landing<'a>(doodler: &Doodler, platforms: &'a [Platform]) -> Option<&'a Platform> {
    if !doodler.is_falling() {
        return None;
    }
    platforms.iter().find(|p| is_landing(doodler, p))
}

/// Snap onto the platform, stop the fall and credit the platform if new
pub fn resolve_landing(
    doodler: &mut Doodler,
    field: &PlatformField,
    score: &mut ScoreTracker,
) -> Option<Landing> {
    let platform = find_landing(doodler, field.platforms())?;

    doodler.pos.y = platform.top() - doodler.size().y;
    doodler.vel.y = 0.0;

    let credited = score.credit(platform.id);
    if credited {
        log::debug!(
            "Credited platform {} (score {})",
            platform.id.0,
            score.displayed()
        );
    }

    Some(Landing {
        platform: platform.id,
        credited,
    })
}
