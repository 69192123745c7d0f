//! Task list tests
mod common;

use common::{
    extract_id_from_response, get_logged_in_handler, get_test_handler, tasks, titles,
};

#[tokio::test]
async fn test_seed_list() {
    let handler = get_logged_in_handler().await;
    assert_eq!(titles(&handler), vec!["GYM", "Coding", "Aptitude"]);
    assert!(tasks(&handler).iter().all(|t| !t.completed));

    let listed = handler.handle_list_tasks().await.unwrap();
    assert!(listed.contains("- [1] GYM (status: open)"));
    assert!(listed.contains("- [2] Coding (status: open)"));
    assert!(listed.contains("- [3] Aptitude (status: open)"));
}

#[tokio::test]
async fn test_add_blank_title_is_noop() {
    let handler = get_logged_in_handler().await;
    for title in ["", "   "] {
        let result = handler.handle_add_task(title.to_string()).await.unwrap();
        assert_eq!(result, "Nothing added: title is blank");
    }
    assert_eq!(tasks(&handler).len(), 3);
}

#[tokio::test]
async fn test_add_task_appends() {
    let handler = get_logged_in_handler().await;
    let prior: Vec<String> = tasks(&handler).into_iter().map(|t| t.id).collect();

    let result = handler.handle_add_task("X".to_string()).await.unwrap();
    let id = extract_id_from_response(&result);
    assert!(result.contains("Task Added!: \"X\" has been added to your list."));

    let all = tasks(&handler);
    let last = all.last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.title, "X");
    assert!(!last.completed);
    assert!(!prior.contains(&id));
}

#[tokio::test]
async fn test_added_ids_are_unique() {
    let handler = get_logged_in_handler().await;
    let mut ids = Vec::new();
    for i in 0..20 {
        let result = handler.handle_add_task(format!("Task {}", i)).await.unwrap();
        ids.push(extract_id_from_response(&result));
    }
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_toggle_twice_restores() {
    let handler = get_logged_in_handler().await;

    let result = handler.handle_toggle_task("2".to_string()).await.unwrap();
    assert!(result.starts_with("- [2] Coding (status: done)"));
    assert!(result.contains("Task Completed!"));

    let result = handler.handle_toggle_task(" 2 ".to_string()).await.unwrap();
    assert!(result.starts_with("- [2] Coding (status: open)"));
    assert!(result.contains("Task Reopened"));
    assert!(!tasks(&handler)[1].completed);
}

#[tokio::test]
async fn test_delete_keeps_others_intact() {
    let handler = get_logged_in_handler().await;
    handler.handle_toggle_task("3".to_string()).await.unwrap();
    let before = tasks(&handler);

    let result = handler.handle_delete_task("2".to_string()).await.unwrap();
    assert!(result.contains("Task Deleted: \"Coding\" has been removed."));

    let after = tasks(&handler);
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
}

#[tokio::test]
async fn test_seed_toggle_then_delete() {
    let handler = get_logged_in_handler().await;

    handler.handle_toggle_task("1".to_string()).await.unwrap();
    assert!(tasks(&handler)[0].completed);

    handler.handle_delete_task("2".to_string()).await.unwrap();
    assert_eq!(titles(&handler), vec!["GYM", "Aptitude"]);
}

#[tokio::test]
async fn test_missing_id_rejected() {
    let handler = get_logged_in_handler().await;
    assert!(handler.handle_toggle_task("999".to_string()).await.is_err());
    assert!(handler.handle_delete_task("999".to_string()).await.is_err());
    assert_eq!(tasks(&handler).len(), 3);
    assert!(tasks(&handler).iter().all(|t| !t.completed));
}

#[tokio::test]
async fn test_task_actions_require_login() {
    let handler = get_test_handler();
    assert!(handler.handle_add_task("X".to_string()).await.is_err());
    assert!(handler.handle_toggle_task("1".to_string()).await.is_err());
    assert!(handler.handle_delete_task("1".to_string()).await.is_err());
    assert_eq!(tasks(&handler).len(), 3);

    // Listing is read-only and always allowed
    assert!(handler.handle_list_tasks().await.is_ok());
}

#[tokio::test]
async fn test_empty_list_message() {
    let handler = get_logged_in_handler().await;
    for id in ["1", "2", "3"] {
        handler.handle_delete_task(id.to_string()).await.unwrap();
    }
    assert_eq!(handler.handle_list_tasks().await.unwrap(), "No tasks found");
}
