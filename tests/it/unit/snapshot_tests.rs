//! Snapshot tests using the insta crate.
//!
//! Inline JSON snapshots pin the serialized shape of the model types and
//! the configuration - the host-facing contract for renderer handoff.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use laneboard::types::{CardModel, ColumnModel};
use laneboard::{BoardConfig, BoardState};

#[test]
fn snapshot_card_model() {
    let card = CardModel::new("c1", "todo", "Fix login crash", 3).with_subtitle("auth");

    insta::assert_json_snapshot!(card, @r###"
    {
      "id": "c1",
      "column_id": "todo",
      "title": "Fix login crash",
      "subtitle": "auth",
      "content": "",
      "sort_order": 3
    }
    "###);
}

#[test]
fn snapshot_board_config_defaults() {
    insta::assert_json_snapshot!(BoardConfig::default(), @r###"
    {
      "edge_snap_margin": 50.0,
      "edge_snap_delay": {
        "secs": 0,
        "nanos": 500000000
      },
      "autoscroll_step": 40.0,
      "autoscroll_cooldown": {
        "secs": 0,
        "nanos": 50000000
      },
      "scroll_edge_margin": 80.0
    }
    "###);
}

#[test]
fn snapshot_board_state() {
    let state = BoardState::new().rebuild(
        Some(vec![
            ColumnModel::new("todo", "To Do"),
            ColumnModel::new("doing", "Doing"),
        ]),
        Some(vec![CardModel::new("c1", "todo", "Write docs", 0)]),
    );

    insta::assert_json_snapshot!(state.snapshot(), @r###"
    {
      "columns": [
        {
          "id": "todo",
          "title": "To Do"
        },
        {
          "id": "doing",
          "title": "Doing"
        }
      ],
      "column_cards": {
        "todo": [
          {
            "id": "c1",
            "column_id": "todo",
            "title": "Write docs",
            "subtitle": "",
            "content": "",
            "sort_order": 0
          }
        ],
        "doing": []
      }
    }
    "###);
}
