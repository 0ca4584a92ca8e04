use crate::*;

#[near]
impl Contract {
    pub fn get_challenge(&self, challenge_id: String) -> Option<ChallengeView> {
        self.challenges
            .get(&challenge_id)
            .map(|challenge| ChallengeView::new(challenge_id.clone(), challenge))
    }
}
