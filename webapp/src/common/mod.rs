pub mod dom;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod style;
pub mod theme;
pub mod toast;

use chrono::Utc;
use rand::{SeedableRng, rngs::SmallRng};

// decorative randomness only; a fresh seed per mount is plenty
pub fn mount_rng() -> SmallRng {
    SmallRng::seed_from_u64(Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64)
}
