use crate::api::RecordId;

/// Identifies an episode across seasons; episode numbers repeat per season
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EpisodeKey {
    pub season: RecordId,
    pub episode: RecordId,
}

impl EpisodeKey {
    pub fn new(season: RecordId, episode: RecordId) -> Self {
        Self { season, episode }
    }
}

/// Which season and which episode are currently expanded.
///
/// The two slots are independent: each holds at most one id, toggling the
/// expanded id collapses it and toggling any other id replaces it. Ids are
/// not checked against the loaded show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    season: Option<RecordId>,
    episode: Option<EpisodeKey>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a season, returning whether it is now expanded
    pub fn toggle_season(&mut self, id: RecordId) -> bool {
        toggle(&mut self.season, id)
    }

    /// Toggle an episode, returning whether it is now expanded
    pub fn toggle_episode(&mut self, key: EpisodeKey) -> bool {
        toggle(&mut self.episode, key)
    }

    pub fn expanded_season(&self) -> Option<&RecordId> {
        self.season.as_ref()
    }

    pub fn expanded_episode(&self) -> Option<&EpisodeKey> {
        self.episode.as_ref()
    }

    pub fn is_season_expanded(&self, id: &RecordId) -> bool {
        self.season.as_ref() == Some(id)
    }

    pub fn is_episode_expanded(&self, key: &EpisodeKey) -> bool {
        self.episode.as_ref() == Some(key)
    }

    /// Collapse everything
    pub fn reset(&mut self) {
        self.season = None;
        self.episode = None;
    }
}

fn toggle<T: PartialEq>(slot: &mut Option<T>, id: T) -> bool {
    if slot.as_ref() == Some(&id) {
        *slot = None;
        false
    } else {
        *slot = Some(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId::from(s)
    }

    #[test]
    fn starts_collapsed() {
        let state = ExpansionState::new();
        assert!(state.expanded_season().is_none());
        assert!(state.expanded_episode().is_none());
    }

    #[test]
    fn toggling_same_season_twice_collapses() {
        let mut state = ExpansionState::new();

        assert!(state.toggle_season(id("1")));
        assert!(state.is_season_expanded(&id("1")));

        assert!(!state.toggle_season(id("1")));
        assert_eq!(state, ExpansionState::default());
    }

    #[test]
    fn expanding_another_season_replaces_the_first() {
        let mut state = ExpansionState::new();

        state.toggle_season(id("A"));
        state.toggle_season(id("B"));

        assert!(!state.is_season_expanded(&id("A")));
        assert!(state.is_season_expanded(&id("B")));
        assert_eq!(state.expanded_season(), Some(&id("B")));
    }

    #[test]
    fn episode_slot_is_independent_of_season_slot() {
        let mut state = ExpansionState::new();
        let key = EpisodeKey::new(id("1"), id("3"));

        state.toggle_season(id("1"));
        assert!(state.toggle_episode(key.clone()));

        // Collapsing the season leaves the episode slot alone
        state.toggle_season(id("1"));
        assert!(state.expanded_season().is_none());
        assert!(state.is_episode_expanded(&key));
    }

    #[test]
    fn same_episode_number_in_other_season_is_a_different_key() {
        let mut state = ExpansionState::new();

        state.toggle_episode(EpisodeKey::new(id("1"), id("1")));
        assert!(state.toggle_episode(EpisodeKey::new(id("2"), id("1"))));
        assert!(!state.is_episode_expanded(&EpisodeKey::new(id("1"), id("1"))));
    }

    #[test]
    fn reset_collapses_both_slots() {
        let mut state = ExpansionState::new();
        state.toggle_season(id("1"));
        state.toggle_episode(EpisodeKey::new(id("1"), id("1")));

        state.reset();
        assert_eq!(state, ExpansionState::new());
    }
}
