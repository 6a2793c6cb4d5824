//! Terminal kiosk demo with a keyboard-simulated distance sensor.
//!
//! Each answer is turned into a run of distance samples (clear area, then the
//! chosen zone) and decoded exactly as live sensor readings would be. Run
//! with `RUST_LOG=debug` to see the engine's logging.

#![allow(clippy::missing_docs_in_private_items)]

extern crate alloc;

use alloc::collections::VecDeque;
use core::iter::repeat_n;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tapjack::{
    Card, Decision, DistanceSensor, GestureDecoder, GestureOptions, HandView, Outcome,
    PlayerInput, Prompt, PromptKind, SeatId, Suit, Table, TableOptions,
};

/// Samples queued per keypress; comfortably above the debounce threshold.
const RUN: usize = 250;

/// Distances inside the clear area, the HIT zone and the STAY zone.
const CLEAR: f64 = 70.0;
const HIT: f64 = 15.0;
const STAY: f64 = 40.0;

struct KeyboardSensor {
    queued: VecDeque<f64>,
}

impl DistanceSensor for KeyboardSensor {
    fn measure(&mut self) -> f64 {
        if let Some(distance) = self.queued.pop_front() {
            return distance;
        }

        let zone = match prompt_line("[h]it / [s]tay: ").as_str() {
            "h" | "hit" => HIT,
            "s" | "stay" => STAY,
            "q" | "quit" => std::process::exit(0),
            _ => CLEAR,
        };
        self.queued.extend(repeat_n(CLEAR, RUN));
        self.queued.extend(repeat_n(zone, RUN));
        CLEAR
    }
}

/// Shows each prompt, then reads the answer off the sensor.
struct KioskInput {
    decoder: GestureDecoder,
    sensor: KeyboardSensor,
}

impl PlayerInput for KioskInput {
    fn decide(&mut self, prompt: &Prompt) -> Option<Decision> {
        let hand = prompt.hand_index + 1;
        match prompt.kind {
            PromptKind::Split => {
                println!("Player {}: split your pair? (hit = yes, stay = no)", prompt.seat);
            }
            PromptKind::HitOrStay => {
                println!(
                    "Player {} hand {hand} ({}): hit or stay?",
                    prompt.seat, prompt.value
                );
            }
        }
        self.decoder.decide(&mut self.sensor.samples())
    }
}

fn main() {
    env_logger::init();
    println!("Touchless blackjack demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_players(2);
    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let mut input = KioskInput {
        decoder: GestureDecoder::new(GestureOptions::default()),
        sensor: KeyboardSensor {
            queued: VecDeque::new(),
        },
    };

    for round in 1.. {
        println!("\n===== ROUND {round} =====");
        table.new_round();
        if let Err(err) = table.deal_opening() {
            println!("Deal error: {err}");
            return;
        }

        for seat in table.seat_ids() {
            println!("\n--- PLAYER {seat}'S TURN ---");
            print_table(&table, Some(seat));
            if let Err(err) = table.play_turn(seat, &mut input) {
                println!("Turn error: {err}");
                return;
            }
            print_table(&table, Some(seat));
        }

        match table.play_dealer() {
            Ok(play) if !play.drawn.is_empty() => {
                println!("Dealer draws {} card(s).", play.drawn.len());
            }
            Ok(_) => {}
            Err(err) => {
                println!("Dealer error: {err}");
                return;
            }
        }

        print_table(&table, None);
        match table.results() {
            Ok(result) => {
                for seat in result.seats {
                    for hand in seat.hands {
                        println!(
                            "Player {} hand {}: {} ({})",
                            seat.seat,
                            hand.hand_index + 1,
                            format_outcome(hand.outcome),
                            hand.player_value
                        );
                    }
                }
            }
            Err(err) => println!("Results error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(table: &Table, current: Option<SeatId>) {
    let view = table.view();
    println!("\nDealer: {}", format_hand(&view.dealer, table.is_hole_hidden()));
    for seat in &view.seats {
        let marker = if Some(seat.seat) == current { "*" } else { " " };
        let hands = seat
            .hands
            .iter()
            .filter(|hand| !hand.empty)
            .map(|hand| format_hand(hand, false))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{marker} Player {}: {hands}", seat.seat);
    }
}

fn format_hand(hand: &HandView, hide_value: bool) -> String {
    if hand.empty {
        return "(empty)".to_string();
    }
    let cards = hand
        .cards
        .iter()
        .map(|view| {
            if view.face_down {
                "??".to_string()
            } else {
                format_card(&view.card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    if hide_value {
        cards
    } else if hand.busted {
        format!("{cards} (busted)")
    } else {
        format!("{cards} ({})", hand.value)
    }
}

fn format_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => colorize("WIN", "32"),
        Outcome::Loss => colorize("LOSS", "31"),
        Outcome::Push => colorize("PUSH", "33"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        10 => "T".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };
    format!("{rank}{}", colorize(suit, color_code))
}
