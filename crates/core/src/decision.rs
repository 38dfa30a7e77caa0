// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decisions.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Chips, Hand, Result, Table, TableError};

/// A decision on the hand waiting to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Take no more cards.
    Stand,
    /// Take one more card.
    Hit,
    /// Double the wager and take exactly one more card.
    Double,
    /// Split a pair into two hands, the second hand wagers the given chips.
    Split(Chips),
    /// Give up the hand and take back half the wager.
    Surrender,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Stand => write!(f, "stand"),
            Decision::Hit => write!(f, "hit"),
            Decision::Double => write!(f, "double"),
            Decision::Split(wager) => write!(f, "split {wager}"),
            Decision::Surrender => write!(f, "surrender"),
        }
    }
}

impl Table {
    /// Applies a decision to the current hand.
    pub fn decide(&self, decision: Decision) -> Result<Table> {
        match decision {
            Decision::Stand => self.stand(),
            Decision::Hit => self.hit(),
            Decision::Double => self.double(),
            Decision::Split(wager) => self.split(wager),
            Decision::Surrender => self.surrender(),
        }
    }

    /// The current hand stands.
    pub fn stand(&self) -> Result<Table> {
        let (seat, hand) = self.acting()?;

        let mut table = self.clone();
        table.seats[seat].hand_mut(hand).is_done = true;
        table.log_decision(Decision::Stand, seat, hand);

        table.advance_turn(true)?;
        Ok(table)
    }

    /// The current hand takes a card, a hand above 21 loses its wager.
    ///
    /// The hand stays open otherwise, and plays again when the turn comes
    /// back to it.
    pub fn hit(&self) -> Result<Table> {
        let (seat, hand) = self.acting()?;

        let mut table = self.clone();
        let card = table.draw()?;

        let h = table.seats[seat].hand_mut(hand);
        h.cards.push(card);
        if h.is_bust() {
            h.lose();
        }

        table.log_decision(Decision::Hit, seat, hand);
        table.advance_turn(true)?;
        Ok(table)
    }

    /// The current hand doubles its wager and takes a last card.
    ///
    /// Not allowed after a split. A bust loses the original wager only.
    pub fn double(&self) -> Result<Table> {
        let (seat, hand) = self.acting()?;
        if self.seats[seat].is_split() {
            return Err(TableError::OnlyDoubleWhenNoSplit);
        }

        let available = self.seats[seat].available_money;
        let amount = self.seats[seat].hands()[hand].betting_box;
        let remaining = available
            .checked_sub(amount)
            .ok_or(TableError::InsufficientFunds { available, amount })?;

        let mut table = self.clone();
        let card = table.draw()?;

        let s = &mut table.seats[seat];
        let h = s.hand_mut(hand);
        h.cards.push(card);
        if h.is_bust() {
            h.lose();
        } else {
            h.betting_box = amount * 2;
            h.is_done = true;
            s.available_money = remaining;
        }

        table.log_decision(Decision::Double, seat, hand);
        table.advance_turn(true)?;
        Ok(table)
    }

    /// Splits a pair into two hands, `wager` goes on the second hand.
    ///
    /// Each hand keeps one of the paired cards and gets a new card. The turn
    /// moves to the next seat and comes back to the split hands in order.
    pub fn split(&self, wager: Chips) -> Result<Table> {
        let (seat, hand) = self.acting()?;

        let current = &self.seats[seat];
        let cards = &current.hands()[hand].cards;
        if current.is_split() || cards.len() != 2 {
            return Err(TableError::OnlySplitFirstTurn);
        }

        let (first, second) = (cards[0], cards[1]);
        if first != second {
            return Err(TableError::OnlySplitEqualCards(first, second));
        }

        self.bet_range.check(wager)?;
        let available = current.available_money;
        let remaining = available
            .checked_sub(wager)
            .ok_or(TableError::InsufficientFunds {
                available,
                amount: wager,
            })?;

        let mut table = self.clone();
        let first_draw = table.draw()?;
        let second_draw = table.draw()?;

        let s = &mut table.seats[seat];
        let betting_box = s.hands()[hand].betting_box;
        s.split_into(
            Hand::new(betting_box, vec![first, first_draw]),
            Hand::new(wager, vec![second, second_draw]),
        );
        s.available_money = remaining;

        table.log_decision(Decision::Split(wager), seat, hand);
        table.advance_turn(false)?;
        Ok(table)
    }

    /// The current hand gives up on its first turn, half the wager is
    /// returned rounded down.
    pub fn surrender(&self) -> Result<Table> {
        let (seat, hand) = self.acting()?;
        if !self.seats[seat].hands()[hand].is_first_turn() {
            return Err(TableError::OnlySurrenderFirstTurn);
        }

        let mut table = self.clone();
        let s = &mut table.seats[seat];
        let refund = s.hands()[hand].betting_box / 2;
        s.hand_mut(hand).lose();
        s.available_money += refund;

        table.log_decision(Decision::Surrender, seat, hand);
        table.advance_turn(true)?;
        Ok(table)
    }

    /// Indexes of the seat and hand waiting for a decision.
    fn acting(&self) -> Result<(usize, usize)> {
        let (seat, _) = self.current_hand().ok_or(TableError::NoHandToPlay)?;
        let idx = self.seat_index(seat.id).ok_or(TableError::NoHandToPlay)?;
        Ok((idx, self.current_playing_hand.hand))
    }

    fn log_decision(&self, decision: Decision, seat: usize, hand: usize) {
        let s = &self.seats[seat];
        let h = &s.hands()[hand];
        debug!(
            "Seat {} hand {hand} {decision}: value {} wager {}{}",
            s.id,
            h.value(),
            h.betting_box,
            if h.is_bust() { " bust" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::{table::tests::bet_range, *};
    use Card::*;

    const SPLIT_SHOE: [Card; 26] = [
        Three, Three, Five, Four, Three, Five, Queen, Five, Six, King, Seven, Two, Seven, //
        Two, Four, Seven, Seven, Jack, Four, Ace, Ten, Nine, Three, Eight, King, Ace,
    ];

    const LOW_SHOE: [Card; 17] = [
        Two, Three, Four, Five, Six, Six, Five, Five, Four, Ace, Seven, Ace, Seven, //
        King, Four, Seven, Seven,
    ];

    const HIGH_SHOE: [Card; 13] = [
        Jack, King, Queen, Four, Three, Five, Five, Six, Four, Ten, Seven, Ten, Seven,
    ];

    /// Two seats with 500 and 600 chips betting 50 and 100.
    fn ready(cards: &[Card]) -> Table {
        let cards = cards.to_vec();
        let mut shuffler = move |_: Vec<Card>| cards.clone();
        Table::start(&mut shuffler, TableConfig::new(1, bet_range()))
            .unwrap()
            .join(Player::new(Chips::new(500)), SeatId::new(0))
            .unwrap()
            .join(Player::new(Chips::new(600)), SeatId::new(1))
            .unwrap()
            .bet(SeatId::new(0), Chips::new(50))
            .unwrap()
            .bet(SeatId::new(1), Chips::new(100))
            .unwrap()
            .deal()
            .unwrap()
    }

    fn hit_times(table: Table, times: usize) -> Table {
        (0..times).fold(table, |t, _| t.hit().unwrap())
    }

    fn hand(table: &Table, seat: usize, hand: usize) -> &Hand {
        &table.seats()[seat].hands()[hand]
    }

    fn turn(seat: u8, hand: usize) -> PlayingHand {
        PlayingHand::new(SeatId::new(seat), hand)
    }

    #[test]
    fn stand_first_seat() {
        let table = ready(&LOW_SHOE).stand().unwrap();

        assert!(hand(&table, 0, 0).is_done);
        assert_eq!(hand(&table, 0, 0).cards, vec![Two, Three]);
        assert_eq!(table.current_playing_hand(), turn(1, 0));
        assert_eq!(table.cards_remaining(), LOW_SHOE.len() - 6);
    }

    #[test]
    fn surrender_first_seat() {
        let table = ready(&LOW_SHOE).surrender().unwrap();

        let h = hand(&table, 0, 0);
        assert!(h.is_done);
        assert_eq!(h.betting_box, Chips::ZERO);
        assert_eq!(table.seats()[0].available_money, Chips::new(475));
    }

    #[test]
    fn surrender_after_hit() {
        let table = ready(&LOW_SHOE).hit().unwrap().hit().unwrap();
        assert_eq!(table.surrender(), Err(TableError::OnlySurrenderFirstTurn));
    }

    #[test]
    fn double_both_seats() {
        let table = ready(&LOW_SHOE).double().unwrap();

        let h = hand(&table, 0, 0);
        assert!(h.is_done);
        assert_eq!(h.betting_box, Chips::new(100));
        assert_eq!(h.cards, vec![Two, Three, Five]);
        assert_eq!(table.seats()[0].available_money, Chips::new(400));
        assert_eq!(table.dealer_hand().cards, vec![Six]);
        assert_eq!(table.shoe().iter().take(3).copied().collect::<Vec<_>>(), [Five, Four, Ace]);

        let table = table.double().unwrap();
        assert_eq!(hand(&table, 1, 0).cards, vec![Four, Five, Five]);
        assert_eq!(hand(&table, 1, 0).betting_box, Chips::new(200));
        assert_eq!(table.seats()[1].available_money, Chips::new(400));

        // Both seats done, the dealer draws to 17.
        assert_eq!(table.dealer_hand().cards, vec![Six, Six, Four, Ace]);
        assert!(table.is_game_finished());
        assert_eq!(table.shoe().iter().take(3).copied().collect::<Vec<_>>(), [Seven, Ace, Seven]);
    }

    #[test]
    fn double_bust_loses_original_wager() {
        let table = ready(&[Ten, Six, Two, Three, Nine, Nine, King, Five]);
        let table = table.double().unwrap();

        let h = hand(&table, 0, 0);
        assert_eq!(h.cards, vec![Ten, Six, King]);
        assert!(h.is_done);
        assert_eq!(h.betting_box, Chips::ZERO);
        assert_eq!(table.seats()[0].available_money, Chips::new(450));
    }

    #[test]
    fn double_without_funds() {
        let mut table = ready(&LOW_SHOE);
        table.seats[0].available_money = Chips::new(20);

        assert_eq!(
            table.double(),
            Err(TableError::InsufficientFunds {
                available: Chips::new(20),
                amount: Chips::new(50)
            })
        );
    }

    #[test]
    fn hit_keeps_hand_open() {
        let table = ready(&LOW_SHOE).hit().unwrap();

        let h = hand(&table, 0, 0);
        assert!(!h.is_done);
        assert_eq!(h.betting_box, Chips::new(50));
        assert_eq!(h.cards, vec![Two, Three, Five]);
        assert_eq!(table.seats()[0].available_money, Chips::new(450));
        assert_eq!(table.current_playing_hand(), turn(1, 0));

        // Back to the first seat after the second seat plays.
        let table = table.hit().unwrap();
        assert_eq!(table.current_playing_hand(), turn(0, 0));
        assert_eq!(table.dealer_hand().cards, vec![Six]);
        assert_eq!(table.dealer_hand().hidden_card, Some(Six));
        assert_eq!(table.shoe().peek(), Some(Four));
    }

    #[test]
    fn hit_bust_loses_wager() {
        let table = ready(&HIGH_SHOE).hit().unwrap();

        let h = hand(&table, 0, 0);
        assert_eq!(h.cards, vec![Jack, King, Five]);
        assert!(h.is_done);
        assert_eq!(h.betting_box, Chips::ZERO);
    }

    #[test]
    fn surrendered_seat_is_skipped() {
        let table = ready(&LOW_SHOE).surrender().unwrap().hit().unwrap();
        assert_eq!(table.current_playing_hand(), turn(1, 0));
    }

    #[test]
    fn split_first_seat() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();

        let seat = &table.seats()[0];
        assert_eq!(
            seat.hands(),
            [
                Hand::new(Chips::new(50), vec![Three, Queen]),
                Hand::new(Chips::new(10), vec![Three, Five]),
            ]
        );
        assert_eq!(seat.available_money, Chips::new(440));
        assert_eq!(table.current_playing_hand(), turn(1, 0));
    }

    #[test]
    fn split_hands_play_in_order() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();
        let table = hit_times(table, 3);

        assert_eq!(hand(&table, 0, 0).cards, vec![Three, Queen, King]);
        assert_eq!(hand(&table, 0, 1).cards, vec![Three, Five, Seven]);
        assert_eq!(hand(&table, 1, 0).cards, vec![Five, Four, Six]);
    }

    #[test]
    fn split_round_to_dealer() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();
        let table = hit_times(table, 7);

        assert_eq!(
            table.seats()[0].hands(),
            [
                Hand {
                    betting_box: Chips::ZERO,
                    cards: vec![Three, Queen, King],
                    is_done: true,
                },
                Hand {
                    betting_box: Chips::ZERO,
                    cards: vec![Three, Five, Seven, Seven],
                    is_done: true,
                },
            ]
        );
        assert_eq!(
            table.seats()[1].hands(),
            [Hand {
                betting_box: Chips::ZERO,
                cards: vec![Five, Four, Six, Two, Two, Four],
                is_done: true,
            }]
        );
        assert_eq!(table.dealer_hand().cards, vec![Three, Five, Seven, Seven]);
        assert_eq!(table.dealer_hand().hidden_card, None);
        assert!(table.is_game_finished());
    }

    #[test]
    fn second_hand_plays_alone() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();
        let table = table.surrender().unwrap();
        assert_eq!(table.seats()[1].available_money, Chips::new(550));

        let table = hit_times(table, 5);
        assert_eq!(
            table.seats()[0].hands(),
            [
                Hand {
                    betting_box: Chips::ZERO,
                    cards: vec![Three, Queen, Six, Seven],
                    is_done: true,
                },
                Hand {
                    betting_box: Chips::ZERO,
                    cards: vec![Three, Five, King, Two, Seven],
                    is_done: true,
                },
            ]
        );
    }

    #[test]
    fn two_seats_split() {
        let table = ready(&[
            Ten, Ten, Two, Two, Three, King, Two, Three, Three, Ten, Seven, Four, Ace, Ace, Eight,
            Five, Six,
        ]);
        let table = table
            .split(Chips::new(10))
            .unwrap()
            .split(Chips::new(10))
            .unwrap();
        assert_eq!(table.current_playing_hand(), turn(0, 0));

        let table = hit_times(table, 4);
        assert_eq!(table.current_playing_hand(), turn(0, 0));

        let table = table.hit().unwrap();
        assert_eq!(hand(&table, 0, 0).cards, vec![Ten, Two, Seven, Eight]);
        assert_eq!(hand(&table, 0, 1).cards, vec![Ten, Three, Four]);
        assert_eq!(hand(&table, 1, 0).cards, vec![Two, Three, Ace]);
        assert_eq!(hand(&table, 1, 1).cards, vec![Two, Ten, Ace]);
    }

    #[test]
    fn stand_on_split_hand() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();
        let table = table.hit().unwrap().stand().unwrap().hit().unwrap();

        assert_eq!(hand(&table, 0, 0).cards, vec![Three, Queen]);
        assert_eq!(hand(&table, 0, 1).cards, vec![Three, Five, King]);
        assert_eq!(hand(&table, 1, 0).cards, vec![Five, Four, Six]);
    }

    #[test]
    fn surrender_split_hand() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();
        let table = table.hit().unwrap().surrender().unwrap().hit().unwrap();

        let seat = &table.seats()[0];
        assert_eq!(seat.available_money, Chips::new(465));
        assert_eq!(
            seat.hands()[0],
            Hand {
                betting_box: Chips::ZERO,
                cards: vec![Three, Queen],
                is_done: true,
            }
        );
        assert_eq!(seat.hands()[1].cards, vec![Three, Five, King]);
        assert_eq!(hand(&table, 1, 0).cards, vec![Five, Four, Six]);
    }

    #[test]
    fn double_after_split() {
        let table = ready(&SPLIT_SHOE).split(Chips::new(10)).unwrap();
        let table = table.hit().unwrap();

        assert_eq!(table.double(), Err(TableError::OnlyDoubleWhenNoSplit));
    }

    #[test]
    fn split_different_cards() {
        let err = ready(&HIGH_SHOE).split(Chips::new(10)).unwrap_err();
        assert_eq!(err, TableError::OnlySplitEqualCards(Jack, King));
        assert_eq!(
            err.to_string(),
            "Card j and card k should be equal for a split"
        );
    }

    #[test]
    fn split_after_first_turn() {
        let table = ready(&LOW_SHOE).hit().unwrap().surrender().unwrap();
        assert_eq!(
            table.split(Chips::new(10)),
            Err(TableError::OnlySplitFirstTurn)
        );
    }

    #[test]
    fn split_wager_checks() {
        let table = ready(&SPLIT_SHOE);
        assert!(matches!(
            table.split(Chips::new(1)),
            Err(TableError::BetTooLow { .. })
        ));

        let mut table = table;
        table.seats[0].available_money = Chips::new(5);
        assert!(matches!(
            table.split(Chips::new(10)),
            Err(TableError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn decisions_without_round() {
        let table = Table::start(&mut crate::table::tests::keep_order, TableConfig::new(1, bet_range()))
            .unwrap()
            .join(Player::new(Chips::new(100)), SeatId::new(0))
            .unwrap();

        for decision in [
            Decision::Stand,
            Decision::Hit,
            Decision::Double,
            Decision::Split(Chips::new(10)),
            Decision::Surrender,
        ] {
            assert_eq!(table.decide(decision), Err(TableError::NoHandToPlay));
        }
    }

    #[test]
    fn decisions_after_dealer_played() {
        let table = ready(&LOW_SHOE).stand().unwrap().stand().unwrap();
        assert!(table.is_game_finished());
        assert_eq!(table.hit(), Err(TableError::NoHandToPlay));
    }

    #[test]
    fn decide_dispatch() {
        let table = ready(&LOW_SHOE);
        assert_eq!(table.decide(Decision::Hit), table.hit());
        assert_eq!(table.decide(Decision::Double), table.double());
        assert_eq!(Decision::Split(Chips::new(20)).to_string(), "split 20");
        assert_eq!(Decision::Surrender.to_string(), "surrender");
    }
}
