use crate::domain::PositionFix;

#[derive(Debug)]
pub enum Event {
    PositionFetched(PositionFix),
    FetchFailed(String),
}
