//! Match resolution integration tests.
//!
//! These tests drive a full `Game` through reveal sequences and check
//! tile states, the revealed queue and what the renderer was told.

use kanamemo::{
    ClickHandler, CollectionDocument, Game, GameBuilder, GroupId, KanamemoError, NullRenderer,
    OrderedContainer, Renderer, RevealOutcome, SymbolGroupCollection, Tile, TileId, TileState,
};

/// Records every render call.
#[derive(Default)]
struct RecordingRenderer {
    rounds: usize,
    calls: Vec<(TileId, TileState, ClickHandler)>,
}

impl Renderer for RecordingRenderer {
    fn begin_round(&mut self, _grid: &kanamemo::Grid) {
        self.rounds += 1;
        self.calls.clear();
    }

    fn render_tile(&mut self, tile: &Tile, handler: ClickHandler) {
        self.calls.push((tile.id(), tile.state(), handler));
    }
}

fn scenario_groups() -> SymbolGroupCollection {
    let doc = CollectionDocument::from_sets([["a", "あ", "ア"], ["i", "い", "イ"]]);
    SymbolGroupCollection::from_document(&doc, 3).unwrap()
}

fn scenario_game<R: Renderer>(renderer: R) -> Game<R> {
    GameBuilder::new()
        .dimensions(1, 4)
        .seed(42)
        .build(scenario_groups(), renderer)
        .unwrap()
}

/// The partner of `id` and one tile from another group.
fn partner_and_stranger<R: Renderer>(game: &Game<R>, id: TileId) -> (TileId, TileId) {
    let partner = game.grid().partners_of(id).next().unwrap().id();
    let stranger = game
        .grid()
        .tiles()
        .iter()
        .find(|t| !t.is_in_same_group_as(game.tile(id).unwrap()))
        .unwrap()
        .id();
    (partner, stranger)
}

// =============================================================================
// Scenarios
// =============================================================================

/// Test a 1x4 grid over two groups: both groups placed exactly twice.
#[test]
fn test_scenario_a_population() {
    let game = scenario_game(NullRenderer);
    let tiles = game.grid().tiles();

    assert_eq!(tiles.len(), 4);
    for group in [GroupId(0), GroupId(1)] {
        let pair: Vec<_> = game.grid().tiles_in_group(group).collect();
        assert_eq!(pair.len(), 2);
        assert!(pair[0].is_in_same_group_as(pair[1]));
        assert_ne!(pair[0].symbol(), pair[1].symbol());
    }
}

/// Test revealing a tile and then its partner: both matched, queue empty.
#[test]
fn test_scenario_b_match() {
    let mut game = scenario_game(NullRenderer);
    let (partner, _) = partner_and_stranger(&game, TileId(0));

    game.reveal(TileId(0)).unwrap();
    let outcome = game.reveal(partner).unwrap();

    assert!(matches!(outcome, RevealOutcome::Matched { .. }));
    assert!(game.tile(TileId(0)).unwrap().is_matched());
    assert!(game.tile(partner).unwrap().is_matched());
    assert!(game.revealed().is_empty());
}

/// Test a mismatch staying up, then flipping down on the next reveal.
#[test]
fn test_scenario_c_mismatch_then_reveal() {
    let mut game = scenario_game(NullRenderer);
    let (partner, stranger) = partner_and_stranger(&game, TileId(0));

    game.reveal(TileId(0)).unwrap();
    let outcome = game.reveal(stranger).unwrap();
    assert!(outcome.is_mismatch());
    assert!(game.tile(TileId(0)).unwrap().is_up());
    assert!(game.tile(stranger).unwrap().is_up());
    assert_eq!(game.revealed(), vec![TileId(0), stranger]);

    let outcome = game.reveal(partner).unwrap();
    match outcome {
        RevealOutcome::Pending { hidden } => assert_eq!(hidden.as_slice(), &[TileId(0), stranger]),
        other => panic!("expected pending, got {other:?}"),
    }
    assert!(game.tile(TileId(0)).unwrap().is_down());
    assert!(game.tile(stranger).unwrap().is_down());
    assert!(game.tile(partner).unwrap().is_up());
    assert_eq!(game.revealed(), vec![partner]);
}

/// Test that a container built from a sequence owns its own copy.
#[test]
fn test_scenario_d_container_copy() {
    let source = vec![TileId(3), TileId(1), TileId(2)];
    let mut copy = OrderedContainer::from(source.as_slice());

    assert_eq!(copy.as_slice(), source.as_slice());
    copy.swap(0, 2).unwrap();
    copy.pop();

    assert_eq!(source, vec![TileId(3), TileId(1), TileId(2)]);
    assert_eq!(copy.as_slice(), &[TileId(2), TileId(1)]);
}

// =============================================================================
// Resolution laws
// =============================================================================

/// Test that a matched tile cannot be revealed again.
#[test]
fn test_matched_reveal_is_noop() {
    let mut game = scenario_game(RecordingRenderer::default());
    let (partner, _) = partner_and_stranger(&game, TileId(0));

    game.reveal(TileId(0)).unwrap();
    game.reveal(partner).unwrap();
    let renders = game.renderer().calls.len();

    assert_eq!(game.reveal(TileId(0)).unwrap(), RevealOutcome::Ignored);
    assert_eq!(game.reveal(partner).unwrap(), RevealOutcome::Ignored);
    assert!(game.tile(TileId(0)).unwrap().is_matched());
    // No transition, so nothing re-rendered
    assert_eq!(game.renderer().calls.len(), renders);
}

/// Test that clicking the same face-up tile twice does not match it with itself.
#[test]
fn test_double_click_is_swallowed() {
    let mut game = scenario_game(NullRenderer);

    game.reveal(TileId(2)).unwrap();
    assert_eq!(game.reveal(TileId(2)).unwrap(), RevealOutcome::Ignored);
    assert_eq!(game.revealed(), vec![TileId(2)]);
    assert!(game.tile(TileId(2)).unwrap().is_up());
}

/// Test that the revealed queue never exceeds the match size between moves.
#[test]
fn test_revealed_bounded() {
    let mut game = GameBuilder::new().dimensions(4, 4).seed(17).build(
        SymbolGroupCollection::from_document(
            &CollectionDocument::from_sets((0..8).map(|i| [format!("r{i}"), format!("h{i}"), format!("k{i}")])),
            3,
        )
        .unwrap(),
        NullRenderer,
    )
    .unwrap();

    for slot in (0..16).chain(0..16).chain((0..16).rev()) {
        game.reveal(TileId(slot)).unwrap();
        assert!(game.revealed().len() <= 2);
        for id in game.revealed() {
            assert!(game.tile(id).unwrap().is_up());
        }
    }
}

/// Test that an unknown slot is rejected without touching the grid.
#[test]
fn test_reveal_out_of_range() {
    let mut game = scenario_game(NullRenderer);
    game.reveal(TileId(1)).unwrap();

    let err = game.reveal(TileId(99)).unwrap_err();
    assert!(matches!(err, KanamemoError::OutOfRange { index: 99, len: 4 }));
    assert_eq!(game.revealed(), vec![TileId(1)]);
}

// =============================================================================
// Rendering
// =============================================================================

/// Test that a new round renders every tile face down with a reveal handler.
#[test]
fn test_round_renders_all_tiles() {
    let game = scenario_game(RecordingRenderer::default());
    let renderer = game.renderer();

    assert_eq!(renderer.rounds, 1);
    assert_eq!(renderer.calls.len(), 4);
    assert!(renderer
        .calls
        .iter()
        .all(|&(_, state, handler)| state == TileState::Down && handler == ClickHandler::Reveal));
}

/// Test that every transition is rendered with the handler for the new state.
#[test]
fn test_transitions_are_rendered() {
    let mut game = scenario_game(RecordingRenderer::default());
    let (partner, stranger) = partner_and_stranger(&game, TileId(0));
    game.renderer_mut().calls.clear();

    game.reveal(TileId(0)).unwrap();
    game.reveal(stranger).unwrap();
    game.reveal(partner).unwrap();
    game.reveal(TileId(0)).unwrap();

    let calls = &game.renderer().calls;
    assert_eq!(
        calls.as_slice(),
        &[
            (TileId(0), TileState::Up, ClickHandler::AlreadyRevealed),
            (stranger, TileState::Up, ClickHandler::AlreadyRevealed),
            (partner, TileState::Up, ClickHandler::AlreadyRevealed),
            (TileId(0), TileState::Down, ClickHandler::Reveal),
            (stranger, TileState::Down, ClickHandler::Reveal),
            (TileId(0), TileState::Up, ClickHandler::AlreadyRevealed),
            (partner, TileState::Matched, ClickHandler::Inert),
            (TileId(0), TileState::Matched, ClickHandler::Inert),
        ]
    );
}
