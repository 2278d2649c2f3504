pub mod mock_feed;
pub mod random;

pub use mock_feed::MockPriceFeed;
pub use random::{BrowserRandom, RandomSource, SequenceRandom};
