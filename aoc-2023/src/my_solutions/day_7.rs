use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

use crate::utils::lines::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["cards", "sorting"])]
pub struct Solver;

const CARDS_IN_HAND: usize = 5;
const JOKER: char = 'J';

fn card_value(card: char, with_jokers: bool) -> Option<u8> {
    let value = match card {
        JOKER if with_jokers => 1,
        'A' => 14,
        'K' => 13,
        'Q' => 12,
        'J' => 11,
        'T' => 10,
        '2'..='9' => card.to_digit(10)? as u8,
        _ => return None,
    };
    Some(value)
}

/// Weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn from_cards(cards: &str) -> HandType {
        let counts: Vec<usize> = cards.chars().counts().into_values().sorted().rev().collect();
        match counts.as_slice() {
            [5] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

/// Jokers replaced by the most frequent other card (the earliest one on ties)
pub fn effective_hand(cards: &str, with_jokers: bool) -> String {
    if !with_jokers || !cards.contains(JOKER) {
        return cards.to_string();
    }
    let counts = cards.chars().filter(|&c| c != JOKER).counts();
    let best = cards
        .chars()
        .filter(|&c| c != JOKER)
        .max_by_key(|c| (counts[c], std::cmp::Reverse(cards.find(*c))));
    match best {
        Some(card) => cards.replace(JOKER, &card.to_string()),
        None => cards.to_string(),
    }
}

/// A parsed input line: five cards and a bid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal<'a> {
    cards: &'a str,
    bid: u64,
}

impl<'a> Deal<'a> {
    fn from_line(line: &'a str) -> anyhow::Result<Self> {
        let (cards, bid) = line
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected '<cards> <bid>', found '{}'", line))?;
        if cards.chars().count() != CARDS_IN_HAND {
            bail!("hands must have exactly {} cards, found '{}'", CARDS_IN_HAND, cards);
        }
        if let Some(bad) = cards.chars().find(|&c| card_value(c, false).is_none()) {
            bail!("unknown card '{}'", bad);
        }
        let bid = bid.parse().with_context(|| format!("bad bid '{}'", bid))?;
        Ok(Deal { cards, bid })
    }

    pub fn hand(&self, with_jokers: bool) -> Hand {
        let mut values = [0u8; CARDS_IN_HAND];
        for (slot, card) in values.iter_mut().zip(self.cards.chars()) {
            *slot = card_value(card, with_jokers).unwrap_or_default();
        }
        Hand {
            kind: HandType::from_cards(&effective_hand(self.cards, with_jokers)),
            values,
            bid: self.bid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    kind: HandType,
    values: [u8; CARDS_IN_HAND],
    bid: u64,
}

impl Hand {
    pub fn kind(&self) -> HandType {
        self.kind
    }

    /// Type first, then card values in dealt order; the bid plays no part
    pub fn strength(&self) -> (HandType, [u8; CARDS_IN_HAND]) {
        (self.kind, self.values)
    }
}

fn total_winnings(deals: &[Deal<'_>], with_jokers: bool) -> u64 {
    deals
        .iter()
        .map(|deal| (deal.hand(with_jokers), deal.cards))
        // stable, so equal hands keep their input order
        .sorted_by_key(|(hand, _)| hand.strength())
        .enumerate()
        .map(|(idx, (hand, cards))| {
            let rank = idx as u64 + 1;
            debug!(cards, effective = %effective_hand(cards, with_jokers), kind = ?hand.kind, rank);
            rank * hand.bid
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Deal<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, Deal::from_line)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        32T3K 765
        T55J5 684
        KK677 28
        KTJJT 220
        QQQJA 483
    "};

    #[test]
    fn test_first_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6440");
    }

    #[test]
    fn test_second_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5905");
    }

    #[test]
    fn test_joker_tie_break_uses_original_cards() {
        let ktjjt = Deal::from_line("KTJJT 1").unwrap().hand(true);
        let qqqja = Deal::from_line("QQQJA 1").unwrap().hand(true);
        assert_eq!(ktjjt.kind(), HandType::FourOfAKind);
        assert_eq!(qqqja.kind(), HandType::FourOfAKind);
        assert!(qqqja.strength() < ktjjt.strength());
    }

    #[test]
    fn test_hand_types() {
        let kind = |cards: &str| {
            Deal::from_line(&format!("{} 1", cards))
                .unwrap()
                .hand(false)
                .kind()
        };
        assert_eq!(kind("AAAAA"), HandType::FiveOfAKind);
        assert_eq!(kind("AA8AA"), HandType::FourOfAKind);
        assert_eq!(kind("23332"), HandType::FullHouse);
        assert_eq!(kind("TTT98"), HandType::ThreeOfAKind);
        assert_eq!(kind("23432"), HandType::TwoPair);
        assert_eq!(kind("A23A4"), HandType::OnePair);
        assert_eq!(kind("23456"), HandType::HighCard);
    }

    #[test]
    fn test_effective_hand() {
        assert_eq!(effective_hand("KTJJT", true), "KTTTT");
        assert_eq!(effective_hand("JJJJJ", true), "JJJJJ");
        assert_eq!(effective_hand("2J3J4", true), "22324");
        assert_eq!(effective_hand("KTJJT", false), "KTJJT");
    }

    #[test]
    fn test_all_jokers_is_five_of_a_kind_but_weakest() {
        let jokers = Deal::from_line("JJJJJ 1").unwrap().hand(true);
        let twos = Deal::from_line("22222 1").unwrap().hand(true);
        assert_eq!(jokers.kind(), HandType::FiveOfAKind);
        assert!(jokers.strength() < twos.strength());
    }

    #[test]
    fn test_equal_hands_rank_in_input_order() {
        let mut shared = Solver::parse("22222 5\n22222 1").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");

        let mut shared = Solver::parse("22222 1\n22222 5").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");
    }

    #[test]
    fn test_bad_lines() {
        assert!(Deal::from_line("KTJJ 1").is_err());
        assert!(Deal::from_line("KTJJX 1").is_err());
        assert!(Deal::from_line("KTJJT").is_err());
        assert!(Deal::from_line("KTJJT x").is_err());
    }
}
