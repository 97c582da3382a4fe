use std::sync::Arc;

use crate::usecase::starred::StarredUseCase;

#[derive(Clone)]
pub struct StarsState {
    pub starred: Arc<dyn StarredUseCase>,
}

impl StarsState {
    pub fn new(starred: Arc<dyn StarredUseCase>) -> Self {
        Self { starred }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::starred::MockStarredUseCase;

    #[test]
    fn test_stars_state_new() {
        let starred: Arc<dyn StarredUseCase> = Arc::new(MockStarredUseCase::new());

        let state = StarsState::new(starred.clone());

        assert!(Arc::ptr_eq(&state.starred, &starred));
    }
}
