mod clock;
mod random;
mod recommender;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{EntropyRandom, RandomSource, SeededRandom};
pub use recommender::Recommender;
