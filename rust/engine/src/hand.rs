use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// The ten hand categories, weakest first. The discriminant is the
/// category rank reported by [`evaluate_hand`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .get(rank as usize)
        .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// How a 6 or 7 card set is classified.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Category predicates run over the entire combined card set.
    #[default]
    WholeSet,
    /// Every 5-card subset is evaluated and the strongest one is kept.
    BestFive,
}

/// Category plus tiebreaker. Ordering compares the category first; the
/// tiebreaker only matters between equal categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub tiebreaker: u64,
}

/// A merged, rank-sorted card set with its per-rank counts.
struct CardSet<'a> {
    cards: &'a [Card],
    counts: [u8; 13],
    distinct: usize,
}

impl<'a> CardSet<'a> {
    fn new(cards: &'a mut [Card]) -> Self {
        cards.sort_by_key(|c| (c.rank.value(), c.suit));
        let mut counts = [0u8; 13];
        for c in cards.iter() {
            counts[c.rank.value() as usize] += 1;
        }
        let distinct = counts.iter().filter(|&&n| n > 0).count();
        Self {
            cards,
            counts,
            distinct,
        }
    }

    fn has(&self, value: usize) -> bool {
        self.counts[value] > 0
    }

    fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    fn ranks_with_at_least(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c >= n).count()
    }

    fn tiebreaker(&self) -> u64 {
        let mut ranked: Vec<(u8, u8)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(v, &n)| (n, v as u8))
            .collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked
            .iter()
            .fold(0u64, |acc, &(_, v)| acc * 13 + u64::from(v))
    }
}

type Predicate = fn(&CardSet) -> bool;

// Strongest first; the first match wins.
const CATEGORY_TABLE: [(Category, Predicate); 9] = [
    (Category::RoyalFlush, is_royal_flush),
    (Category::StraightFlush, is_straight_flush),
    (Category::FourOfAKind, is_four_of_a_kind),
    (Category::FullHouse, is_full_house),
    (Category::Flush, is_flush),
    (Category::Straight, is_straight),
    (Category::ThreeOfAKind, is_three_of_a_kind),
    (Category::TwoPair, is_two_pair),
    (Category::OnePair, is_one_pair),
];

const ACE: usize = 12;

fn is_royal_flush(set: &CardSet) -> bool {
    is_straight_flush(set) && set.has(ACE)
}

fn is_straight_flush(set: &CardSet) -> bool {
    is_straight(set) && is_flush(set)
}

fn is_four_of_a_kind(set: &CardSet) -> bool {
    set.max_count() >= 4
}

fn is_full_house(set: &CardSet) -> bool {
    set.max_count() >= 3 && set.distinct == 2
}

fn is_flush(set: &CardSet) -> bool {
    match set.cards.first() {
        Some(first) => set.cards.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

fn is_straight(set: &CardSet) -> bool {
    if set.distinct < 5 {
        return false;
    }
    let mut run = 0;
    for v in 0..13 {
        if set.has(v) {
            run += 1;
            if run >= 5 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    // wheel: A-2-3-4-5
    set.has(ACE) && (0..4).all(|v| set.has(v))
}

fn is_three_of_a_kind(set: &CardSet) -> bool {
    set.max_count() >= 3
}

fn is_two_pair(set: &CardSet) -> bool {
    set.ranks_with_at_least(2) >= 2
}

fn is_one_pair(set: &CardSet) -> bool {
    set.max_count() >= 2
}

fn classify(set: &CardSet) -> Category {
    CATEGORY_TABLE
        .iter()
        .find(|(_, pred)| pred(set))
        .map(|&(cat, _)| cat)
        .unwrap_or(Category::HighCard)
}

fn merge(hole: &[Card], community: &[Card]) -> Result<Vec<Card>, GameError> {
    if hole.len() != 2 || community.len() > 5 {
        return Err(GameError::InvalidHand {
            hole: hole.len(),
            community: community.len(),
        });
    }
    let mut all = Vec::with_capacity(hole.len() + community.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(community);
    Ok(all)
}

/// Classifies two hole cards plus up to five community cards over the
/// whole combined set and returns the category.
///
/// # Errors
///
/// [`GameError::InvalidHand`] unless `hole` holds exactly two cards and
/// `community` at most five.
///
/// # Examples
///
/// ```
/// use pokersim_engine::cards::parse_cards;
/// use pokersim_engine::hand::{evaluate_hand, Category};
///
/// let hole = parse_cards("6h 6c").unwrap();
/// let board = parse_cards("2d 8s 10c").unwrap();
/// assert_eq!(evaluate_hand(&hole, &board).unwrap(), Category::OnePair);
/// ```
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> Result<Category, GameError> {
    let mut all = merge(hole, community)?;
    Ok(classify(&CardSet::new(&mut all)))
}

/// Base-13 encoding of the distinct ranks ordered by (count, rank) descending.
///
/// Only comparable between hands of the same category. Equal values are a
/// true tie.
pub fn tiebreaker_rank(hole: &[Card], community: &[Card]) -> Result<u64, GameError> {
    let mut all = merge(hole, community)?;
    Ok(CardSet::new(&mut all).tiebreaker())
}

fn strength_of(cards: &mut [Card]) -> HandStrength {
    let set = CardSet::new(cards);
    HandStrength {
        category: classify(&set),
        tiebreaker: set.tiebreaker(),
    }
}

/// Conventional scoring of at most five cards: the wheel is a 5-high
/// straight and only T-J-Q-K-A suited is a royal flush.
fn five_card_strength(cards: &mut [Card]) -> HandStrength {
    let set = CardSet::new(cards);
    let category = classify(&set);
    let wheel = set.distinct == 5 && set.has(ACE) && (0..4).all(|v| set.has(v));
    if !wheel {
        return HandStrength {
            category,
            tiebreaker: set.tiebreaker(),
        };
    }
    // 5-4-3-2 then the Ace played low, below every other straight
    let tiebreaker = [3u64, 2, 1, 0, 0].iter().fold(0, |acc, &v| acc * 13 + v);
    let category = match category {
        Category::RoyalFlush => Category::StraightFlush,
        other => other,
    };
    HandStrength {
        category,
        tiebreaker,
    }
}

/// Category and tiebreaker under the given [`EvaluationMode`].
pub fn evaluate_strength(
    hole: &[Card],
    community: &[Card],
    mode: EvaluationMode,
) -> Result<HandStrength, GameError> {
    let mut all = merge(hole, community)?;
    if mode == EvaluationMode::WholeSet {
        return Ok(strength_of(&mut all));
    }
    if all.len() <= 5 {
        return Ok(five_card_strength(&mut all));
    }
    let n = all.len();
    let mut best: Option<HandStrength> = None;
    let mut subset = Vec::with_capacity(5);
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        subset.clear();
        subset.extend((0..n).filter(|i| mask & (1 << i) != 0).map(|i| all[i]));
        let s = five_card_strength(&mut subset);
        if best.map_or(true, |b| s > b) {
            best = Some(s);
        }
    }
    best.ok_or(GameError::InvalidHand {
        hole: hole.len(),
        community: community.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn set_of(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn table_is_ordered_strongest_first() {
        let ranks: Vec<u8> = CATEGORY_TABLE.iter().map(|(c, _)| c.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn straight_needs_five_distinct_ranks() {
        let mut cards = set_of("2h 3d 4c 5s 5h");
        assert!(!is_straight(&CardSet::new(&mut cards)));
        let mut cards = set_of("9h Td Jc Qs Kh");
        assert!(is_straight(&CardSet::new(&mut cards)));
    }

    #[test]
    fn tiebreaker_puts_multiples_first() {
        // pair of sixes (value 4) then 10 (8), 8 (6), 2 (0)
        let mut cards = set_of("6h 6c 2d 8s Tc");
        let expected = ((4u64 * 13 + 8) * 13 + 6) * 13;
        assert_eq!(CardSet::new(&mut cards).tiebreaker(), expected);
    }

    #[test]
    fn wheel_scores_below_six_high_straight() {
        let mut wheel = set_of("Ah 2d 3c 4s 5h");
        let mut six_high = set_of("2h 3d 4c 5s 6h");
        let wheel = five_card_strength(&mut wheel);
        let six_high = five_card_strength(&mut six_high);
        assert_eq!(wheel.category, Category::Straight);
        assert!(wheel < six_high);

        let mut steel = set_of("Ah 2h 3h 4h 5h");
        assert_eq!(five_card_strength(&mut steel).category, Category::StraightFlush);
        let mut royal = set_of("Th Jh Qh Kh Ah");
        assert_eq!(five_card_strength(&mut royal).category, Category::RoyalFlush);
    }

    #[test]
    fn category_rank_round_trips() {
        assert_eq!(Category::from_rank(9), Some(Category::RoyalFlush));
        assert_eq!(Category::from_rank(10), None);
        assert_eq!(Category::FullHouse.to_string(), "Full House");
    }
}
