//! Backtracking search for when the deduction rules stall.

use crate::board::{City, Height};
use std::sync::atomic::{AtomicBool, Ordering};

/// Tries every candidate of one open cell, tallest first, recursing into the
/// full solver after each trial placement. The grid is restored from a
/// snapshot between trials, so a failed search leaves the city as it was.
/// Returns `None` iff cancelled.
pub(crate) fn search(city: &mut City, cancel: &AtomicBool) -> Option<bool> {
    let (x, y) = match pick_cell(city) {
        Some(cell) => cell,
        None => return Some(false),
    };
    let snapshot = city.clone();
    let size = city.size();
    for height in (1..=size).rev().map(Height::new) {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        if !city.tower(x, y).options().contains(height) {
            continue;
        }
        log::trace!("search: trying {} at ({}, {})", height.get(), x, y);
        // cannot fail, the candidate was just checked against an open cell
        if city.set_tower_height(x, y, height).is_ok() {
            match crate::solver::run(city, cancel) {
                None => return None,
                Some(true) => return Some(true),
                Some(false) => {}
            }
        }
        *city = snapshot.clone();
    }
    Some(false)
}

/// The open cell whose row and column carry the most leftover candidates.
/// Guessing there prunes the widest part of the search space first.
fn pick_cell(city: &City) -> Option<(u8, u8)> {
    let size = city.size();
    let mut best = None;
    let mut best_score = 0u32;
    for y in 0..size {
        for x in 0..size {
            if city.tower(x, y).is_complete() {
                continue;
            }
            let score = line_candidates(city, x, y);
            if best.is_none() || score > best_score {
                best = Some((x, y));
                best_score = score;
            }
        }
    }
    best
}

fn line_candidates(city: &City, x: u8, y: u8) -> u32 {
    let size = city.size();
    let row: u32 = (0..size)
        .map(|cx| u32::from(city.tower(cx, y).options().len()))
        .sum();
    let col: u32 = (0..size)
        .map(|cy| u32::from(city.tower(x, cy).options().len()))
        .sum();
    row + col
}
