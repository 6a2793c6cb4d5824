//! Deck, hand, split, dealer policy and outcome tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tapjack::policy::{self, DealerStep};
use tapjack::result::resolve;
use tapjack::split;
use tapjack::{
    AceDemotion, Card, DECK_SIZE, DealError, Deck, Hand, MAX_HAND, Outcome, SplitError, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[u8]) -> Hand {
    hand_with(AceDemotion::default(), ranks)
}

fn hand_with(demotion: AceDemotion, ranks: &[u8]) -> Hand {
    let mut hand = Hand::with_demotion(demotion);
    for &rank in ranks {
        hand.deal_into(card(Suit::Hearts, rank)).unwrap();
    }
    hand
}

fn stacked(prefix: &[Card]) -> Deck {
    let mut cards = *Deck::new().cards();
    cards[..prefix.len()].copy_from_slice(prefix);
    Deck::with_order(cards)
}

#[test]
fn deck_starts_in_suit_major_order() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(cards[0], card(Suit::Spades, 1));
    assert_eq!(cards[12], card(Suit::Spades, 13));
    assert_eq!(cards[13], card(Suit::Clubs, 1));
    assert_eq!(cards[26], card(Suit::Diamonds, 1));
    assert_eq!(cards[39], card(Suit::Hearts, 1));
    assert_eq!(cards[51], card(Suit::Hearts, 13));
    assert_eq!(deck.dealt(), 0);
}

#[test]
fn shuffled_deck_deals_every_card_once_then_runs_out() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let dealt: Vec<Card> = (0..DECK_SIZE).map(|_| deck.deal().unwrap()).collect();
    let unique: HashSet<Card> = dealt.iter().copied().collect();
    let all: HashSet<Card> = Deck::new().cards().iter().copied().collect();

    assert_eq!(unique, all);
    assert_eq!(deck.remaining(), 0);
    assert_eq!(deck.deal().unwrap_err(), DealError::DeckExhausted);
}

#[test]
fn shuffle_resets_cursor_and_is_seed_deterministic() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.deal().unwrap();
    first.deal().unwrap();

    first.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

    assert_eq!(first.dealt(), 0);
    assert_eq!(first.cards(), second.cards());
    assert_ne!(first.cards(), Deck::new().cards());
}

#[test]
fn hard_cards_sum_until_bust_then_reject_more() {
    let mut hand = hand_of(&[2, 3, 4, 5]);
    assert_eq!(hand.value(), 14);
    assert!(!hand.is_busted());
    assert!(!hand.is_empty());

    hand.deal_into(card(Suit::Clubs, 12)).unwrap();
    assert_eq!(hand.value(), 24);
    assert!(hand.is_busted());

    assert_eq!(
        hand.deal_into(card(Suit::Clubs, 2)).unwrap_err(),
        DealError::HandBusted
    );
    assert_eq!(hand.value(), 24);
    assert_eq!(hand.len(), 5);
}

#[test]
fn ace_enters_soft_and_demotes_once() {
    let mut hand = hand_of(&[1]);
    assert_eq!(hand.value(), 11);
    assert_eq!(hand.soft_aces(), 1);

    hand.deal_into(card(Suit::Spades, 6)).unwrap();
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());

    hand.deal_into(card(Suit::Spades, 9)).unwrap();
    assert_eq!(hand.value(), 16);
    assert_eq!(hand.soft_aces(), 0);
    assert!(!hand.is_busted());
}

#[test]
fn full_hand_rejects_thirteenth_card() {
    let mut hand = hand_of(&[1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3]);
    assert_eq!(hand.value(), 21);
    assert_eq!(hand.len(), 11);

    hand.deal_into(card(Suit::Clubs, 3)).unwrap();
    assert_eq!(hand.len(), MAX_HAND);
    assert!(hand.is_busted());

    assert_eq!(
        hand.deal_into(card(Suit::Clubs, 4)).unwrap_err(),
        DealError::HandFull
    );
}

#[test]
fn default_hand_demotes_one_ace_per_card() {
    let mut hand = Hand::new();
    assert_eq!(hand.demotion(), AceDemotion::OncePerCard);

    hand.deal_into(card(Suit::Spades, 1)).unwrap();
    hand.deal_into(card(Suit::Spades, 13)).unwrap();
    assert_eq!((hand.value(), hand.soft_aces()), (21, 1));

    hand.deal_into(card(Suit::Clubs, 1)).unwrap();
    assert_eq!((hand.value(), hand.soft_aces()), (22, 1));
    assert!(!hand.is_busted());
}

#[test]
fn ace_on_hard_twenty_one_depends_on_demotion_policy() {
    let until_safe = hand_with(AceDemotion::UntilSafe, &[10, 5, 6, 1]);
    assert_eq!(until_safe.value(), 22);
    assert!(until_safe.is_busted());

    // One demotion per card leaves the hand at 22 without a bust.
    let once = hand_with(AceDemotion::OncePerCard, &[10, 5, 6, 1]);
    assert_eq!(once.value(), 22);
    assert_eq!(once.soft_aces(), 0);
    assert!(!once.is_busted());
}

#[test]
fn ace_on_soft_twenty_one_depends_on_demotion_policy() {
    let until_safe = hand_with(AceDemotion::UntilSafe, &[1, 13, 1]);
    assert_eq!(until_safe.value(), 12);
    assert_eq!(until_safe.soft_aces(), 0);

    let once = hand_with(AceDemotion::OncePerCard, &[1, 13, 1]);
    assert_eq!(once.value(), 22);
    assert_eq!(once.soft_aces(), 1);
    assert!(!once.is_busted());
}

#[test]
fn splitting_sevens_leaves_two_sevens() {
    let mut first = hand_of(&[7, 7]);
    let second = split::separate(&mut first).unwrap();

    for hand in [&first, &second] {
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.value(), 7);
        assert_eq!(hand.soft_aces(), 0);
        assert!(hand.is_from_split());
    }
}

#[test]
fn splitting_aces_leaves_two_soft_elevens() {
    let mut first = hand_of(&[1, 1]);
    assert_eq!(first.value(), 12);

    let second = split::separate(&mut first).unwrap();
    for hand in [&first, &second] {
        assert_eq!(hand.value(), 11);
        assert_eq!(hand.soft_aces(), 1);
    }
}

#[test]
fn splitting_face_cards_scores_ten_each() {
    let mut first = hand_of(&[13, 13]);
    let second = split::separate(&mut first).unwrap();
    assert_eq!(first.value(), 10);
    assert_eq!(second.value(), 10);
}

#[test]
fn split_rejects_non_pairs_and_resplits() {
    let mut mixed = hand_of(&[7, 8]);
    assert_eq!(split::separate(&mut mixed).unwrap_err(), SplitError::NotAPair);
    assert_eq!(mixed.len(), 2);

    let mut three = hand_of(&[4, 4, 4]);
    assert_eq!(split::separate(&mut three).unwrap_err(), SplitError::NotAPair);

    // Jack and King both score 10 but are not the same rank.
    let mut tens = hand_of(&[11, 13]);
    assert_eq!(split::separate(&mut tens).unwrap_err(), SplitError::NotAPair);

    let mut deck = stacked(&[card(Suit::Clubs, 9), card(Suit::Clubs, 9)]);
    let mut first = hand_of(&[9, 9]);
    split::split(&mut first, &mut deck).unwrap();
    assert!(first.is_pair());
    assert_eq!(
        split::separate(&mut first).unwrap_err(),
        SplitError::AlreadySplit
    );
}

#[test]
fn split_without_two_cards_left_changes_nothing() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE - 1 {
        deck.deal().unwrap();
    }
    let mut hand = hand_of(&[8, 8]);

    assert_eq!(
        split::split(&mut hand, &mut deck).unwrap_err(),
        SplitError::Deal(DealError::DeckExhausted)
    );
    assert_eq!(hand.len(), 2);
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_from_split());
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn split_deals_one_card_into_each_hand() {
    let mut deck = stacked(&[card(Suit::Spades, 3), card(Suit::Diamonds, 4)]);
    let mut first = hand_of(&[7, 7]);

    let second = split::split(&mut first, &mut deck).unwrap();

    assert_eq!(first.value(), 10);
    assert_eq!(second.value(), 11);
    assert_eq!(first.cards()[1], card(Suit::Spades, 3));
    assert_eq!(second.cards()[1], card(Suit::Diamonds, 4));
    assert_eq!(deck.dealt(), 2);
}

#[test]
fn dealer_stands_on_hard_seventeen() {
    let mut dealer = hand_of(&[10, 7]);
    assert_eq!(policy::next_step(&dealer), DealerStep::Stand(17));

    let mut deck = Deck::new();
    let play = policy::play(&mut dealer, &mut deck).unwrap();
    assert!(play.drawn.is_empty());
    assert_eq!(play.finish, DealerStep::Stand(17));
    assert_eq!(deck.dealt(), 0);
}

#[test]
fn dealer_hits_soft_seventeen() {
    let mut dealer = hand_of(&[1, 6]);
    assert_eq!(dealer.soft_aces(), 1);
    assert_eq!(policy::next_step(&dealer), DealerStep::Draw);

    let mut deck = stacked(&[card(Suit::Clubs, 2)]);
    let play = policy::play(&mut dealer, &mut deck).unwrap();
    assert_eq!(play.drawn, vec![card(Suit::Clubs, 2)]);
    assert_eq!(play.finish, DealerStep::Stand(19));
}

#[test]
fn dealer_draws_until_bust() {
    let mut dealer = hand_of(&[10, 2]);
    let mut deck = stacked(&[card(Suit::Clubs, 3), card(Suit::Hearts, 12)]);

    let play = policy::play(&mut dealer, &mut deck).unwrap();
    assert_eq!(play.drawn.len(), 2);
    assert_eq!(play.finish, DealerStep::Bust);
    assert!(dealer.is_busted());
    assert_eq!(policy::next_step(&dealer), DealerStep::Bust);
}

#[test]
fn outcomes_against_dealer_twenty() {
    let dealer = hand_of(&[10, 13]);
    assert_eq!(dealer.value(), 20);

    assert_eq!(resolve(&hand_of(&[10, 12]), &dealer), Outcome::Push);
    assert_eq!(resolve(&hand_of(&[10, 9]), &dealer), Outcome::Loss);
    assert_eq!(resolve(&hand_of(&[10, 1]), &dealer), Outcome::Win);
    assert_eq!(resolve(&hand_of(&[10, 9, 5]), &dealer), Outcome::Loss);
}

#[test]
fn outcomes_against_busted_dealer() {
    let dealer = hand_of(&[10, 6, 8]);
    assert!(dealer.is_busted());

    assert_eq!(resolve(&hand_of(&[10, 2]), &dealer), Outcome::Win);
    assert_eq!(resolve(&hand_of(&[10, 2, 13]), &dealer), Outcome::Loss);
}
