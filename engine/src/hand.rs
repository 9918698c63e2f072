use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories from weakest to strongest. Discriminants (1..=9) are the
/// category numbers surfaced in logs and records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

/// Comparable strength of a five-card hand. The derived ordering is
/// lexicographic: category first, then tiebreak ranks high to low.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // tiebreak ranks, most significant first; unused slots stay zero
    pub tiebreak: [u8; 5],
}

impl HandStrength {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// Evaluates exactly five well-formed cards into a [`HandStrength`].
///
/// # Errors
///
/// Returns [`GameError::InvalidHandSize`] unless exactly 5 cards are given,
/// and [`GameError::DuplicateCard`] if the same card appears twice.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, GameError> {
    if cards.len() != 5 {
        return Err(GameError::InvalidHandSize(cards.len()));
    }
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if a == b {
                return Err(GameError::DuplicateCard(*a));
            }
        }
    }

    // Count ranks, then group as (count, rank) sorted descending so the
    // defining ranks of each category come first.
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    for &c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for r in 2..=14u8 {
        let n = rank_counts[r as usize];
        if n > 0 {
            groups.push((n, r));
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&rank_counts);

    if flush {
        if let Some(high) = straight {
            return Ok(HandStrength {
                category: Category::StraightFlush,
                tiebreak: [high, 0, 0, 0, 0],
            });
        }
    }
    if groups[0].0 == 4 {
        return Ok(HandStrength {
            category: Category::FourOfAKind,
            tiebreak: [groups[0].1, groups[1].1, 0, 0, 0],
        });
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return Ok(HandStrength {
            category: Category::FullHouse,
            tiebreak: [groups[0].1, groups[1].1, 0, 0, 0],
        });
    }
    if flush {
        return Ok(HandStrength {
            category: Category::Flush,
            tiebreak: ranks_desc(cards),
        });
    }
    if let Some(high) = straight {
        return Ok(HandStrength {
            category: Category::Straight,
            tiebreak: [high, 0, 0, 0, 0],
        });
    }
    if groups[0].0 == 3 {
        return Ok(HandStrength {
            category: Category::ThreeOfAKind,
            tiebreak: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        });
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        return Ok(HandStrength {
            category: Category::TwoPair,
            tiebreak: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        });
    }
    if groups[0].0 == 2 {
        return Ok(HandStrength {
            category: Category::OnePair,
            tiebreak: [groups[0].1, groups[1].1, groups[2].1, groups[3].1, 0],
        });
    }
    Ok(HandStrength {
        category: Category::HighCard,
        tiebreak: ranks_desc(cards),
    })
}

fn straight_high(rank_counts: &[u8; 15]) -> Option<u8> {
    let ranks: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if ranks.len() != 5 {
        return None;
    }
    // ranks are ascending; a run spans exactly four steps
    if ranks[4] - ranks[0] == 4 {
        return Some(ranks[4]);
    }
    // wheel: the ace plays low, five high
    if ranks == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

fn ranks_desc(cards: &[Card]) -> [u8; 5] {
    let mut v: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    v.sort_unstable_by(|a, b| b.cmp(a));
    let mut out = [0u8; 5];
    out.copy_from_slice(&v);
    out
}
