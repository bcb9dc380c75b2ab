//! The authoritative board state and its mutation operations.
//!
//! `BoardState` is a pair of insertion-ordered maps behind `Arc`:
//! columns by id, and the ordered card list of each column. Mutations never
//! edit the maps in place - every operation builds new map instances and
//! returns a new `BoardState`, so a host can compare map identity to decide
//! whether to re-render. The cards and columns themselves are shared
//! handles: a swap replaces the maps, not the models, which keeps the drag
//! session's card handle live across swaps.

use crate::error::{BoardError, BoardResult};
use crate::types::{card_ref, column_ref, CardModel, CardRef, ColumnModel, ColumnRef};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

/// The two authoritative maps. Cheap to clone; clones share the maps until
/// the next mutation swaps them.
#[derive(Clone, Default, Debug)]
pub struct BoardState {
    columns: Arc<IndexMap<String, ColumnRef>>,
    column_cards: Arc<IndexMap<String, Vec<CardRef>>>,
}

/// Plain serializable copy of a [`BoardState`], for renderer handoff and
/// snapshot assertions. Transient flags are not serialized.
#[derive(Clone, Debug, Serialize)]
pub struct BoardSnapshot {
    pub columns: Vec<ColumnModel>,
    pub column_cards: IndexMap<String, Vec<CardModel>>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Read Access ====================

    /// Columns in rendering order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnRef> {
        self.columns.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column handle by id.
    pub fn column(&self, id: &str) -> Option<ColumnRef> {
        self.columns.get(id).cloned()
    }

    /// The ordered card list of a column, if the column exists.
    pub fn cards_in(&self, column_id: &str) -> Option<&[CardRef]> {
        self.column_cards.get(column_id).map(Vec::as_slice)
    }

    /// Total number of cards across all columns.
    pub fn card_count(&self) -> usize {
        self.column_cards.values().map(Vec::len).sum()
    }

    /// Find a card handle anywhere on the board.
    pub fn find_card(&self, card_id: &str) -> Option<CardRef> {
        self.column_cards
            .values()
            .flatten()
            .find(|card| card.read().id == card_id)
            .cloned()
    }

    /// Index of a card within a column's list.
    pub fn card_index_in(&self, column_id: &str, card_id: &str) -> Option<usize> {
        self.column_cards
            .get(column_id)?
            .iter()
            .position(|card| card.read().id == card_id)
    }

    /// True when `other` holds the very same map instances. Hosts use this
    /// to skip re-derivation when nothing was swapped.
    pub fn shares_maps_with(&self, other: &BoardState) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
            && Arc::ptr_eq(&self.column_cards, &other.column_cards)
    }

    /// Plain copy of the current models for rendering or serialization.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.values().map(|c| c.read().clone()).collect(),
            column_cards: self
                .column_cards
                .iter()
                .map(|(id, cards)| {
                    (id.clone(), cards.iter().map(|c| c.read().clone()).collect())
                })
                .collect(),
        }
    }

    // ==================== Mutations ====================

    /// Rebuild the maps from upstream collections.
    ///
    /// A supplied column list fully replaces the column map in the order
    /// given. A supplied card list fully replaces the card partition,
    /// silently dropping cards whose `column_id` is unknown. An omitted side
    /// reuses the previous map, re-homed against the (possibly new) column
    /// set so that every column has a list and no list belongs to a vanished
    /// column.
    pub fn rebuild(
        &self,
        columns: Option<Vec<ColumnModel>>,
        cards: Option<Vec<CardModel>>,
    ) -> BoardState {
        let columns_map: IndexMap<String, ColumnRef> = match columns {
            Some(columns) => columns
                .into_iter()
                .map(|column| (column.id.clone(), column_ref(column)))
                .collect(),
            None => (*self.columns).clone(),
        };

        let mut column_cards: IndexMap<String, Vec<CardRef>> = match cards {
            Some(cards) => {
                let mut partition: IndexMap<String, Vec<CardRef>> = IndexMap::new();
                for card in cards {
                    if !columns_map.contains_key(&card.column_id) {
                        continue;
                    }
                    partition
                        .entry(card.column_id.clone())
                        .or_default()
                        .push(card_ref(card));
                }
                partition
            }
            None => {
                let mut kept = (*self.column_cards).clone();
                kept.retain(|column_id, _| columns_map.contains_key(column_id));
                kept
            }
        };

        for column_id in columns_map.keys() {
            if !column_cards.contains_key(column_id) {
                column_cards.insert(column_id.clone(), Vec::new());
            }
        }

        BoardState {
            columns: Arc::new(columns_map),
            column_cards: Arc::new(column_cards),
        }
    }

    /// Move a card out of one column and onto the head of another.
    ///
    /// Removes the card (by id) from the source list, inserts it at index 0
    /// of the destination list, repoints the card's `column_id`, and marks
    /// every card in the destination list as needing re-measurement - their
    /// screen positions all shift by one slot.
    pub fn move_to_other_column(
        &self,
        card: &CardRef,
        from: &ColumnRef,
        to: &ColumnRef,
    ) -> BoardResult<BoardState> {
        let card_id = card.read().id.clone();
        let from_id = from.read().id.clone();
        let to_id = to.read().id.clone();

        if from_id == to_id {
            return Err(BoardError::SameColumn { card_id, column_id: to_id });
        }

        // An error below discards this clone; the published maps never see
        // a half-applied move.
        let mut column_cards = (*self.column_cards).clone();

        let Some(source) = column_cards.get_mut(&from_id) else {
            return Err(BoardError::UnknownColumn(from_id));
        };
        source.retain(|c| c.read().id != card_id);

        let Some(destination) = column_cards.get_mut(&to_id) else {
            return Err(BoardError::UnknownColumn(to_id));
        };
        destination.insert(0, card.clone());
        for resident in destination.iter() {
            resident.write().invalidate();
        }

        card.write().column_id = to_id;

        Ok(BoardState {
            columns: Arc::new((*self.columns).clone()),
            column_cards: Arc::new(column_cards),
        })
    }

    /// Relocate a card within its column to the slot a reference card
    /// currently occupies.
    ///
    /// A single-element relocation, not a swap: the card is removed and
    /// reinserted at the reference card's index, every other card keeps its
    /// relative order. The whole list is marked for re-measurement.
    pub fn move_card_to_position(
        &self,
        card: &CardRef,
        reference: &CardRef,
        column: &ColumnRef,
    ) -> BoardResult<BoardState> {
        let card_id = card.read().id.clone();
        let reference_id = reference.read().id.clone();
        let column_id = column.read().id.clone();

        let mut column_cards = (*self.column_cards).clone();
        let Some(list) = column_cards.get_mut(&column_id) else {
            return Err(BoardError::UnknownColumn(column_id));
        };

        let Some(reference_index) = list.iter().position(|c| c.read().id == reference_id) else {
            return Err(BoardError::ReferenceCardMissing(reference_id));
        };
        let Some(card_index) = list.iter().position(|c| c.read().id == card_id) else {
            return Err(BoardError::CardNotInColumn { card_id, column_id });
        };

        let moved = list.remove(card_index);
        let slot = reference_index.min(list.len());
        list.insert(slot, moved);

        for resident in list.iter() {
            resident.write().invalidate();
        }

        Ok(BoardState {
            columns: Arc::new((*self.columns).clone()),
            column_cards: Arc::new(column_cards),
        })
    }
}
