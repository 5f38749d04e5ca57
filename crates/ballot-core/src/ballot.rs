//! The ballot state machine.
//!
//! A chairperson grants voting rights; rights-holders vote for a proposal or
//! delegate their weight. Each operation either applies completely or
//! returns an error with the ballot untouched: all checks and arithmetic
//! happen before the first write.

use std::collections::{HashMap, HashSet};
use ballot_types::{Address, ProposalName};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::config::BallotConfig;
use crate::delegation::DelegationView;
use crate::error::BallotError;
use crate::proposal::{self, Proposal};
use crate::voter::Voter;

/// Delegated, weighted ballot over a fixed list of proposals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BallotState")]
pub struct Ballot {
    chairperson: Address,
    proposals: Vec<Proposal>,
    voters: HashMap<Address, Voter>,
    config: BallotConfig,
}

/// Unchecked serialized form, validated into a `Ballot`.
#[derive(Deserialize)]
struct BallotState {
    chairperson: Address,
    proposals: Vec<Proposal>,
    voters: HashMap<Address, Voter>,
    #[serde(default)]
    config: BallotConfig,
}

impl TryFrom<BallotState> for Ballot {
    type Error = BallotError;

    fn try_from(state: BallotState) -> Result<Self, Self::Error> {
        if state.proposals.is_empty() {
            return Err(BallotError::NoProposals);
        }
        for (address, voter) in &state.voters {
            if voter.voted_directly() && voter.vote >= state.proposals.len() {
                return Err(BallotError::InvalidState(format!(
                    "{} voted for missing proposal {}",
                    address, voter.vote
                )));
            }
        }
        validate_delegations(&state.voters)?;
        Ok(Self {
            chairperson: state.chairperson,
            proposals: state.proposals,
            voters: state.voters,
            config: state.config,
        })
    }
}

/// Check that every delegate pointer names a rights-holder and that no
/// chain of pointers loops.
fn validate_delegations(voters: &HashMap<Address, Voter>) -> Result<(), BallotError> {
    for (address, voter) in voters {
        let Some(first) = voter.delegate else {
            continue;
        };
        if !voter.voted {
            return Err(BallotError::InvalidState(format!(
                "{} has a delegate but has not voted",
                address
            )));
        }

        let mut seen = HashSet::from([*address]);
        let mut current = first;
        loop {
            let record = voters.get(&current).copied().unwrap_or_default();
            if !record.has_right() {
                return Err(BallotError::InvalidState(format!(
                    "{} delegated to {} which has no right to vote",
                    address, current
                )));
            }
            if !seen.insert(current) {
                return Err(BallotError::InvalidState(format!(
                    "delegation from {} loops at {}",
                    address, current
                )));
            }
            match record.delegate {
                Some(next) => current = next,
                None => break,
            }
        }
    }
    Ok(())
}

impl Ballot {
    /// Create a ballot with the default configuration.
    ///
    /// `caller` becomes the chairperson and receives weight 1.
    pub fn new<I>(proposal_names: I, caller: Address) -> Result<Self, BallotError>
    where
        I: IntoIterator<Item = ProposalName>,
    {
        Self::with_config(proposal_names, caller, BallotConfig::default())
    }

    /// Create a ballot with an explicit configuration.
    pub fn with_config<I>(
        proposal_names: I,
        caller: Address,
        config: BallotConfig,
    ) -> Result<Self, BallotError>
    where
        I: IntoIterator<Item = ProposalName>,
    {
        let proposals: Vec<Proposal> = proposal_names.into_iter().map(Proposal::new).collect();
        if proposals.is_empty() {
            return Err(BallotError::NoProposals);
        }

        let mut voters = HashMap::new();
        voters.insert(caller, Voter::with_right());

        info!(
            "Created ballot with {} proposals, chairperson {}",
            proposals.len(),
            caller
        );

        Ok(Self {
            chairperson: caller,
            proposals,
            voters,
            config,
        })
    }

    /// Create a ballot from readable proposal names.
    pub fn from_names<S: AsRef<str>>(names: &[S], caller: Address) -> Result<Self, BallotError> {
        let names = names
            .iter()
            .map(|n| ProposalName::new(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(names, caller)
    }

    /// Give `voter` the right to vote. Only the chairperson may call this.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the chairperson
    /// - `AlreadyVoted` if `voter` has already voted
    /// - `AlreadyGranted` if `voter` already holds weight
    pub fn give_right_to_vote(
        &mut self,
        caller: Address,
        voter: Address,
    ) -> Result<(), BallotError> {
        if caller != self.chairperson {
            debug!("Rejected grant from non-chairperson {}", caller);
            return Err(BallotError::Unauthorized(
                "Only chairperson can give right to vote".to_string(),
            ));
        }

        let record = self.voter(&voter);
        if record.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if record.weight != 0 {
            return Err(BallotError::AlreadyGranted);
        }

        self.voters.insert(voter, Voter::with_right());
        info!("Granted right to vote to {}", voter);
        Ok(())
    }

    /// Delegate `caller`'s vote to `to`.
    ///
    /// The weight follows the chain from `to` to its final delegate. If that
    /// delegate already voted, the weight goes straight into the tally of the
    /// chosen proposal; otherwise it is added to the delegate's weight.
    ///
    /// # Errors
    /// - `NoRight` if `caller` has no weight
    /// - `AlreadyVoted` if `caller` already voted or delegated
    /// - `SelfDelegation` if `to == caller`
    /// - `DelegationCycle` if the chain loops back to `caller` or is too long
    /// - `DelegateHasNoRight` if the final delegate has no weight
    /// - `WeightOverflow` if the receiving weight or tally would overflow
    pub fn delegate(&mut self, caller: Address, to: Address) -> Result<(), BallotError> {
        let sender = self.voter(&caller);
        if !sender.has_right() {
            return Err(BallotError::NoRight);
        }
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }

        let resolved = self.delegation_view().resolve_delegate(caller, to)?;
        let target = self.voter(&resolved);
        if !target.has_right() {
            return Err(BallotError::DelegateHasNoRight(resolved));
        }

        if target.voted {
            let index = target.vote;
            let current = self
                .proposals
                .get(index)
                .map(|p| p.vote_count)
                .ok_or_else(|| {
                    BallotError::InvalidState(format!(
                        "{} voted for missing proposal {}",
                        resolved, index
                    ))
                })?;
            let updated = current
                .checked_add(sender.weight)
                .ok_or(BallotError::WeightOverflow)?;

            self.mark_delegated(caller, resolved);
            self.proposals[index].vote_count = updated;
            info!(
                "{} delegated weight {} to {} (counted for proposal {})",
                caller, sender.weight, resolved, index
            );
        } else {
            let updated = target
                .weight
                .checked_add(sender.weight)
                .ok_or(BallotError::WeightOverflow)?;

            self.mark_delegated(caller, resolved);
            self.voters.entry(resolved).or_default().weight = updated;
            info!(
                "{} delegated weight {} to {}",
                caller, sender.weight, resolved
            );
        }

        Ok(())
    }

    fn mark_delegated(&mut self, caller: Address, resolved: Address) {
        let sender = self.voters.entry(caller).or_default();
        sender.voted = true;
        sender.delegate = Some(resolved);
    }

    /// Cast `caller`'s full weight for the proposal at `proposal`.
    ///
    /// # Errors
    /// - `NoRight` if `caller` has no weight
    /// - `AlreadyVoted` if `caller` already voted or delegated
    /// - `InvalidIndex` if `proposal` is out of range
    /// - `WeightOverflow` if the tally would overflow
    pub fn vote(&mut self, caller: Address, proposal: usize) -> Result<(), BallotError> {
        let sender = self.voter(&caller);
        if !sender.has_right() {
            return Err(BallotError::NoRight);
        }
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }

        let count = self.proposals.len();
        let current = self
            .proposals
            .get(proposal)
            .map(|p| p.vote_count)
            .ok_or(BallotError::InvalidIndex { index: proposal, count })?;
        let updated = current
            .checked_add(sender.weight)
            .ok_or(BallotError::WeightOverflow)?;

        let record = self.voters.entry(caller).or_default();
        record.voted = true;
        record.vote = proposal;
        self.proposals[proposal].vote_count = updated;

        info!(
            "{} voted for proposal {} with weight {}",
            caller, proposal, sender.weight
        );
        Ok(())
    }

    /// Index of the proposal with the most weight; ties go to the lowest index.
    pub fn winning_proposal(&self) -> usize {
        proposal::winning_index(&self.proposals)
    }

    /// Name of the winning proposal.
    pub fn winner_name(&self) -> &ProposalName {
        &self.proposals[self.winning_proposal()].name
    }

    pub fn chairperson(&self) -> Address {
        self.chairperson
    }

    pub fn config(&self) -> &BallotConfig {
        &self.config
    }

    /// Get a proposal by index.
    pub fn proposal(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// Get the voter record for an address (default record if never touched).
    pub fn voter(&self, address: &Address) -> Voter {
        self.voters.get(address).copied().unwrap_or_default()
    }

    /// All addresses with a non-default record.
    pub fn voters(&self) -> impl Iterator<Item = (&Address, &Voter)> {
        self.voters.iter()
    }

    /// Delegates reached from `address`, in order.
    pub fn delegation_chain(&self, address: &Address) -> Vec<Address> {
        self.delegation_view().chain(*address)
    }

    fn delegation_view(&self) -> DelegationView<'_> {
        DelegationView::new(&self.voters, self.config.max_delegation_depth)
    }

    /// Weight already counted into proposal tallies.
    pub fn spent_weight(&self) -> u64 {
        proposal::total_votes(&self.proposals)
    }

    /// Weight held by addresses that have not voted yet.
    pub fn unspent_weight(&self) -> u64 {
        self.voters
            .values()
            .filter(|v| !v.voted)
            .map(|v| v.weight)
            .sum()
    }

    /// Number of addresses that were ever given the right to vote.
    pub fn rights_holders(&self) -> usize {
        self.voters.values().filter(|v| v.has_right()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(n: u8) -> Address {
        let mut addr = [0u8; 20];
        addr[19] = n;
        Address::from_bytes(addr)
    }

    fn chair() -> Address {
        test_address(100)
    }

    fn ballot() -> Ballot {
        Ballot::from_names(&["Prop 1", "Prop 2", "Prop 3"], chair()).unwrap()
    }

    fn granted(voters: &[Address]) -> Ballot {
        let mut ballot = ballot();
        for voter in voters {
            ballot.give_right_to_vote(chair(), *voter).unwrap();
        }
        ballot
    }

    #[test]
    fn test_construction() {
        let ballot = ballot();

        assert_eq!(ballot.proposal_count(), 3);
        assert_eq!(ballot.proposal(1).unwrap().name.as_str(), "Prop 2");
        assert!(ballot.proposals().iter().all(|p| p.vote_count == 0));
        assert_eq!(ballot.chairperson(), chair());
        assert_eq!(ballot.voter(&chair()).weight, 1);
        assert_eq!(ballot.voter(&test_address(1)), Voter::default());
    }

    #[test]
    fn test_construction_requires_proposals() {
        let names: Vec<ProposalName> = Vec::new();
        assert_eq!(Ballot::new(names, chair()), Err(BallotError::NoProposals));
    }

    #[test]
    fn test_construction_rejects_long_name() {
        let long = "n".repeat(33);
        assert!(matches!(
            Ballot::from_names(&[long.as_str()], chair()),
            Err(BallotError::InvalidProposalName(_))
        ));
    }

    #[test]
    fn test_give_right_to_vote() {
        let mut ballot = ballot();
        ballot.give_right_to_vote(chair(), Address::ZERO).unwrap();
        assert_eq!(ballot.voter(&Address::ZERO).weight, 1);
    }

    #[test]
    fn test_give_right_only_chairperson() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        let before = ballot.clone();

        let result = ballot.give_right_to_vote(alice, test_address(2));
        assert!(matches!(result, Err(BallotError::Unauthorized(_))));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_give_right_twice() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        let before = ballot.clone();

        assert_eq!(
            ballot.give_right_to_vote(chair(), alice),
            Err(BallotError::AlreadyGranted)
        );
        assert_eq!(ballot, before);

        // Chairperson already holds weight 1
        assert_eq!(
            ballot.give_right_to_vote(chair(), chair()),
            Err(BallotError::AlreadyGranted)
        );
    }

    #[test]
    fn test_give_right_after_vote() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        ballot.vote(alice, 0).unwrap();
        let before = ballot.clone();

        assert_eq!(
            ballot.give_right_to_vote(chair(), alice),
            Err(BallotError::AlreadyVoted)
        );
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_vote() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);

        ballot.vote(alice, 2).unwrap();

        let voter = ballot.voter(&alice);
        assert!(voter.voted);
        assert_eq!(voter.vote, 2);
        assert_eq!(ballot.proposal(2).unwrap().vote_count, voter.weight);
        assert_eq!(ballot.proposal(0).unwrap().vote_count, 0);
        assert_eq!(ballot.proposal(1).unwrap().vote_count, 0);
    }

    #[test]
    fn test_vote_without_right() {
        let mut ballot = ballot();
        let before = ballot.clone();

        assert_eq!(ballot.vote(test_address(9), 0), Err(BallotError::NoRight));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_vote_twice() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        ballot.vote(alice, 0).unwrap();
        let before = ballot.clone();

        assert_eq!(ballot.vote(alice, 1), Err(BallotError::AlreadyVoted));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_vote_invalid_index() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        let before = ballot.clone();

        assert_eq!(
            ballot.vote(alice, 3),
            Err(BallotError::InvalidIndex { index: 3, count: 3 })
        );
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_delegate_transfers_weight() {
        let alice = test_address(1);
        let bob = test_address(2);
        let mut ballot = granted(&[alice, bob]);

        ballot.delegate(alice, bob).unwrap();

        let delegator = ballot.voter(&alice);
        assert!(delegator.voted);
        assert_eq!(delegator.delegate, Some(bob));
        assert_eq!(ballot.voter(&bob).weight, 2);
        assert_eq!(ballot.spent_weight(), 0);
    }

    #[test]
    fn test_delegate_to_voted_target() {
        let alice = test_address(1);
        let bob = test_address(2);
        let mut ballot = granted(&[alice, bob]);

        ballot.vote(bob, 1).unwrap();
        ballot.delegate(alice, bob).unwrap();

        assert_eq!(ballot.proposal(1).unwrap().vote_count, 2);
        assert_eq!(ballot.voter(&bob).weight, 1);
    }

    #[test]
    fn test_delegate_follows_chain() {
        let alice = test_address(1);
        let bob = test_address(2);
        let charlie = test_address(3);
        let mut ballot = granted(&[alice, bob, charlie]);

        ballot.delegate(bob, charlie).unwrap();
        ballot.delegate(alice, bob).unwrap();

        assert_eq!(ballot.voter(&alice).delegate, Some(charlie));
        assert_eq!(ballot.voter(&charlie).weight, 3);
        assert_eq!(ballot.voter(&bob).weight, 1);
        assert_eq!(ballot.delegation_chain(&alice), vec![charlie]);
    }

    #[test]
    fn test_self_delegation_rejected() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        let before = ballot.clone();

        assert_eq!(ballot.delegate(alice, alice), Err(BallotError::SelfDelegation));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_delegate_without_right() {
        let bob = test_address(2);
        let mut ballot = granted(&[bob]);
        let before = ballot.clone();

        assert_eq!(ballot.delegate(test_address(9), bob), Err(BallotError::NoRight));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_delegate_to_address_without_right() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        let before = ballot.clone();

        assert_eq!(
            ballot.delegate(alice, test_address(9)),
            Err(BallotError::DelegateHasNoRight(test_address(9)))
        );
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_delegate_after_vote() {
        let alice = test_address(1);
        let bob = test_address(2);
        let mut ballot = granted(&[alice, bob]);
        ballot.vote(alice, 0).unwrap();
        let before = ballot.clone();

        assert_eq!(ballot.delegate(alice, bob), Err(BallotError::AlreadyVoted));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_delegation_depth_limit() {
        let voters: Vec<Address> = (1..=4).map(test_address).collect();
        let mut ballot = Ballot::with_config(
            vec![ProposalName::new("Only").unwrap()],
            chair(),
            BallotConfig::default().with_max_delegation_depth(1),
        )
        .unwrap();
        for voter in &voters {
            ballot.give_right_to_vote(chair(), *voter).unwrap();
        }

        // 0 -> 1, then 1 -> 2 leaves a two-hop chain behind 0
        ballot.delegate(voters[0], voters[1]).unwrap();
        ballot.delegate(voters[1], voters[2]).unwrap();
        assert_eq!(ballot.voter(&voters[2]).weight, 3);

        let before = ballot.clone();
        assert_eq!(
            ballot.delegate(voters[3], voters[0]),
            Err(BallotError::DelegationCycle)
        );
        assert_eq!(ballot, before);

        // One hop is within the bound
        ballot.delegate(voters[3], voters[1]).unwrap();
        assert_eq!(ballot.voter(&voters[3]).delegate, Some(voters[2]));
        assert_eq!(ballot.voter(&voters[2]).weight, 4);
    }

    #[test]
    fn test_winning_proposal() {
        let voters: Vec<Address> = (1..=3).map(test_address).collect();
        let mut ballot = granted(&voters);

        assert_eq!(ballot.winning_proposal(), 0);
        assert_eq!(ballot.winner_name().as_str(), "Prop 1");

        ballot.vote(voters[0], 2).unwrap();
        ballot.vote(voters[1], 1).unwrap();
        // Tie between 1 and 2 goes to 1
        assert_eq!(ballot.winning_proposal(), 1);

        ballot.vote(voters[2], 2).unwrap();
        assert_eq!(ballot.winning_proposal(), 2);
        assert_eq!(ballot.winner_name().as_str(), "Prop 3");
    }

    #[test]
    fn test_weight_accounting() {
        let alice = test_address(1);
        let bob = test_address(2);
        let charlie = test_address(3);
        let mut ballot = granted(&[alice, bob, charlie]);

        assert_eq!(ballot.rights_holders(), 4);
        assert_eq!(ballot.unspent_weight(), 4);

        ballot.delegate(alice, bob).unwrap();
        ballot.vote(bob, 0).unwrap();
        ballot.delegate(charlie, bob).unwrap();

        assert_eq!(ballot.spent_weight(), 3);
        assert_eq!(ballot.unspent_weight(), 1);
        assert_eq!(
            ballot.spent_weight() + ballot.unspent_weight(),
            ballot.rights_holders() as u64
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let alice = test_address(1);
        let mut ballot = granted(&[alice]);
        ballot.delegate(alice, chair()).unwrap();

        let json = serde_json::to_string(&ballot).unwrap();
        let restored: Ballot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ballot);
    }

    fn snapshot(voters: &str) -> String {
        format!(
            r#"{{"chairperson":"{}","proposals":[{{"name":"Prop 1","vote_count":0}},{{"name":"Prop 2","vote_count":0}}],"voters":{{{}}}}}"#,
            chair(),
            voters
        )
    }

    fn record(
        address: Address,
        weight: u64,
        voted: bool,
        delegate: Option<Address>,
        vote: usize,
    ) -> String {
        let delegate = match delegate {
            Some(d) => format!("\"{}\"", d),
            None => "null".to_string(),
        };
        format!(
            r#""{}":{{"weight":{},"voted":{},"delegate":{},"vote":{}}}"#,
            address, weight, voted, delegate, vote
        )
    }

    #[test]
    fn test_delegate_overflow_leaves_state_unchanged() {
        let heavy = test_address(1);
        let light = test_address(2);
        let json = snapshot(&format!(
            "{},{}",
            record(heavy, u64::MAX, false, None, 0),
            record(light, 1, false, None, 0)
        ));
        let mut ballot: Ballot = serde_json::from_str(&json).unwrap();
        let before = ballot.clone();

        // Receiving weight would overflow
        assert_eq!(ballot.delegate(light, heavy), Err(BallotError::WeightOverflow));
        assert_eq!(ballot, before);

        // Voted target: the tally would overflow
        ballot.vote(heavy, 1).unwrap();
        let before = ballot.clone();
        assert_eq!(ballot.delegate(light, heavy), Err(BallotError::WeightOverflow));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_vote_overflow_leaves_state_unchanged() {
        let heavy = test_address(1);
        let light = test_address(2);
        let json = snapshot(&format!(
            "{},{}",
            record(heavy, u64::MAX, false, None, 0),
            record(light, 1, false, None, 0)
        ));
        let mut ballot: Ballot = serde_json::from_str(&json).unwrap();
        ballot.vote(light, 0).unwrap();
        let before = ballot.clone();

        assert_eq!(ballot.vote(heavy, 0), Err(BallotError::WeightOverflow));
        assert_eq!(ballot, before);
    }

    #[test]
    fn test_deserialize_rejects_vote_for_missing_proposal() {
        let json = snapshot(&record(test_address(1), 1, true, None, 5));
        let err = serde_json::from_str::<Ballot>(&json).unwrap_err();
        assert!(err.to_string().contains("missing proposal 5"));
    }

    #[test]
    fn test_deserialize_rejects_delegate_without_right() {
        let json = snapshot(&record(test_address(1), 1, true, Some(test_address(2)), 0));
        let err = serde_json::from_str::<Ballot>(&json).unwrap_err();
        assert!(err.to_string().contains("no right to vote"));
    }

    #[test]
    fn test_deserialize_rejects_delegation_loop() {
        let a = test_address(1);
        let b = test_address(2);
        let json = snapshot(&format!(
            "{},{}",
            record(a, 1, true, Some(b), 0),
            record(b, 1, true, Some(a), 0)
        ));
        let err = serde_json::from_str::<Ballot>(&json).unwrap_err();
        assert!(err.to_string().contains("loops"));
    }

    #[test]
    fn test_deserialize_rejects_delegate_without_vote() {
        let json = snapshot(&format!(
            "{},{}",
            record(test_address(1), 1, false, Some(test_address(2)), 0),
            record(test_address(2), 1, false, None, 0)
        ));
        assert!(serde_json::from_str::<Ballot>(&json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_long_delegation_chain() {
        let voters: Vec<Address> = (1..=5).map(test_address).collect();
        let mut ballot = Ballot::with_config(
            [ProposalName::new("Only").unwrap()],
            chair(),
            BallotConfig::default().with_max_delegation_depth(1),
        )
        .unwrap();
        for voter in &voters {
            ballot.give_right_to_vote(chair(), *voter).unwrap();
        }
        for pair in voters.windows(2) {
            ballot.delegate(pair[0], pair[1]).unwrap();
        }

        let json = serde_json::to_string(&ballot).unwrap();
        let restored: Ballot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ballot);
    }

    #[test]
    fn test_deserialize_rejects_empty_proposals() {
        let json = format!(
            r#"{{"chairperson":"{}","proposals":[],"voters":{{}}}}"#,
            chair()
        );
        assert!(serde_json::from_str::<Ballot>(&json).is_err());
    }
}
