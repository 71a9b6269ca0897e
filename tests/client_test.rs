//! Tests for the click-to-move controller against a scripted server.

mod common;

use common::{Call, ScriptedApi, after_move, initial_board, sq};
use strictly_chess::{
    ChessClient, ClientErrorKind, GAME_OVER_MESSAGE, MoveOutcome, MoveRequest, NotificationQueue,
};

async fn started_client(api: &ScriptedApi) -> ChessClient<ScriptedApi, NotificationQueue> {
    api.push_board(initial_board());
    let mut client = ChessClient::new(api.clone(), NotificationQueue::new());
    client.start().await.expect("start should load the board");
    client
}

#[tokio::test]
async fn test_start_renders_saved_board() {
    let api = ScriptedApi::new();
    let client = started_client(&api).await;

    assert_eq!(client.board().snapshot(), initial_board());
    assert_eq!(api.calls(), vec![Call::FetchBoard]);
}

#[tokio::test]
async fn test_start_propagates_transport_failure() {
    let api = ScriptedApi::new();
    let mut client = ChessClient::new(api.clone(), NotificationQueue::new());
    let err = client.start().await.unwrap_err();
    assert!(matches!(err.kind(), ClientErrorKind::Http(_)));
}

#[tokio::test]
async fn test_first_click_only_highlights() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;

    let outcome = client.on_square_clicked(sq("e2")).await.unwrap();

    assert_eq!(outcome, None);
    assert_eq!(client.pending(), Some(sq("e2")));
    assert_eq!(client.board().highlighted(), Some(sq("e2")));
    assert_eq!(api.calls(), vec![Call::FetchBoard]);
}

#[tokio::test]
async fn test_accepted_move_rerenders_board() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    let next = after_move(&initial_board(), "e2", "e4");
    api.push_outcome(MoveOutcome::Accepted);
    api.push_status(next.clone(), false);

    client.on_square_clicked(sq("e2")).await.unwrap();
    let outcome = client.on_square_clicked(sq("e4")).await.unwrap();

    assert_eq!(outcome, Some(MoveOutcome::Accepted));
    assert_eq!(client.board().snapshot(), next);
    assert_eq!(client.board().cell(sq("e4")).content(), "P");
    assert!(client.notifier().is_empty());
    assert_eq!(client.pending(), None);
    assert_eq!(client.board().highlighted(), None);
    assert_eq!(
        api.calls(),
        vec![
            Call::FetchBoard,
            Call::SubmitMove(MoveRequest::new(sq("e2"), sq("e4"))),
            Call::FetchMoveStatus,
        ]
    );
}

#[tokio::test]
async fn test_rejected_move_notifies_and_leaves_board() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_outcome(MoveOutcome::Rejected {
        message: "illegal move".to_string(),
    });

    client.on_square_clicked(sq("e2")).await.unwrap();
    let outcome = client.on_square_clicked(sq("e5")).await.unwrap();

    assert_eq!(
        outcome,
        Some(MoveOutcome::Rejected {
            message: "illegal move".to_string()
        })
    );
    assert_eq!(client.notifier().messages(), ["illegal move"]);
    assert_eq!(client.board().snapshot(), initial_board());
    assert_eq!(client.pending(), None);
    assert_eq!(client.board().highlighted(), None);
    assert!(!api.calls().contains(&Call::FetchMoveStatus));
}

#[tokio::test]
async fn test_transport_failure_still_clears_selection() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_transport_failure();

    client.on_square_clicked(sq("e2")).await.unwrap();
    let result = client.on_square_clicked(sq("e4")).await;

    assert!(result.is_err());
    assert_eq!(client.pending(), None);
    assert_eq!(client.board().highlighted(), None);
    assert_eq!(client.board().snapshot(), initial_board());
    assert!(client.status_message().contains("failed"));
}

#[tokio::test]
async fn test_second_click_submits_exactly_once() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_outcome(MoveOutcome::Rejected {
        message: "not your turn".to_string(),
    });

    client.on_square_clicked(sq("a7")).await.unwrap();
    client.on_square_clicked(sq("a6")).await.unwrap();

    let submissions = api
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::SubmitMove(_)))
        .count();
    assert_eq!(submissions, 1);
}

#[tokio::test]
async fn test_same_square_twice_goes_to_server() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_outcome(MoveOutcome::Rejected {
        message: "source and destination are the same".to_string(),
    });

    client.on_square_clicked(sq("e2")).await.unwrap();
    client.on_square_clicked(sq("e2")).await.unwrap();

    assert!(
        api.calls()
            .contains(&Call::SubmitMove(MoveRequest::new(sq("e2"), sq("e2"))))
    );
    assert_eq!(client.pending(), None);
}

#[tokio::test]
async fn test_game_over_notifies_and_resets() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    let final_position = after_move(&initial_board(), "d8", "h4");
    api.push_outcome(MoveOutcome::Accepted);
    api.push_status(final_position, true);
    api.push_board(initial_board());

    client.on_square_clicked(sq("d8")).await.unwrap();
    client.on_square_clicked(sq("h4")).await.unwrap();

    assert_eq!(client.notifier().messages(), [GAME_OVER_MESSAGE]);
    assert_eq!(client.board().snapshot(), initial_board());
    assert_eq!(
        api.calls(),
        vec![
            Call::FetchBoard,
            Call::SubmitMove(MoveRequest::new(sq("d8"), sq("h4"))),
            Call::FetchMoveStatus,
            Call::FetchBoard,
        ]
    );
}

#[tokio::test]
async fn test_game_over_with_failed_reset_keeps_final_position() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    let final_position = after_move(&initial_board(), "e2", "e4");
    api.push_outcome(MoveOutcome::Accepted);
    api.push_status(final_position.clone(), true);

    client.on_square_clicked(sq("e2")).await.unwrap();
    let result = client.on_square_clicked(sq("e4")).await;

    assert!(result.is_err());
    assert_eq!(client.notifier().messages(), [GAME_OVER_MESSAGE]);
    assert_eq!(client.board().snapshot(), final_position);
    assert_eq!(client.board().cell(sq("e4")).content(), "P");
    assert_eq!(client.pending(), None);
    assert!(client.status_message().contains("refresh failed"));
}

#[tokio::test]
async fn test_failed_refresh_after_accepted_move_updates_status() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_outcome(MoveOutcome::Accepted);

    client.on_square_clicked(sq("e2")).await.unwrap();
    assert!(client.status_message().starts_with("Selected e2"));
    let err = client.on_square_clicked(sq("e4")).await.unwrap_err();

    assert!(matches!(err.kind(), ClientErrorKind::Http(_)));
    assert_eq!(client.pending(), None);
    assert_eq!(client.board().highlighted(), None);
    assert!(client.status_message().contains("failed"));
    assert!(!client.status_message().starts_with("Selected"));
}

#[tokio::test]
async fn test_check_game_over_false_is_noop() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;

    assert!(!client.check_game_over(false).await.unwrap());
    assert!(client.notifier().is_empty());
    assert_eq!(api.calls(), vec![Call::FetchBoard]);
}

#[tokio::test]
async fn test_unrecognized_code_does_nothing() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_outcome(MoveOutcome::Unrecognized("500".to_string()));

    client.on_square_clicked(sq("e2")).await.unwrap();
    let outcome = client.on_square_clicked(sq("e4")).await.unwrap();

    assert_eq!(outcome, Some(MoveOutcome::Unrecognized("500".to_string())));
    assert!(client.notifier().is_empty());
    assert_eq!(client.board().snapshot(), initial_board());
    assert!(!api.calls().contains(&Call::FetchMoveStatus));
}

#[tokio::test]
async fn test_reset_drops_pending_selection() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.push_board(initial_board());

    client.on_square_clicked(sq("g1")).await.unwrap();
    client.reset_board().await.unwrap();

    assert_eq!(client.pending(), None);
    assert_eq!(client.board().highlighted(), None);
    assert_eq!(api.calls(), vec![Call::FetchBoard, Call::FetchBoard]);
}

#[tokio::test]
async fn test_show_score_notifies() {
    let api = ScriptedApi::new();
    let mut client = started_client(&api).await;
    api.set_score(38.0, 37.5);

    client.show_score().await.unwrap();

    assert_eq!(client.notifier().messages(), ["White: 38  Black: 37.5"]);
    assert_eq!(api.calls().last(), Some(&Call::FetchScore));
}
