use user_directory::clients::UserClient;
use user_directory::controller::{ActionResult, SearchView, UserController};
use user_directory::framework::mock::{self, MockClient};
use user_directory::framework::FrameworkError;
use user_directory::model::{User, UserCreate, UserForm, UserUpdate};
use user_directory::user_actor::UserError;

fn controller_for(mock: &MockClient<User>) -> UserController {
    UserController::new(UserClient::new(mock.client()))
}

#[tokio::test]
async fn infrastructure_failures_surface_as_errors() {
    let mut mock = MockClient::<User>::new();
    mock.expect_list().return_err(FrameworkError::ActorClosed);
    mock.expect_get(7).return_err(FrameworkError::ActorDropped);

    let controller = controller_for(&mock);
    assert_eq!(
        controller.index().await,
        Err(UserError::ActorCommunicationError("Actor closed".into()))
    );
    assert!(matches!(
        controller.details(7).await,
        Err(UserError::ActorCommunicationError(_))
    ));

    mock.verify();
}

#[tokio::test]
async fn not_found_from_the_actor_is_an_outcome() {
    let mut mock = MockClient::<User>::new();
    mock.expect_delete(3)
        .return_err(FrameworkError::NotFound("3".into()));

    let controller = controller_for(&mock);
    assert_eq!(controller.delete(3).await, Ok(ActionResult::NotFound));

    mock.verify();
}

#[tokio::test]
async fn edit_checks_existence_before_updating() {
    let mut mock = MockClient::<User>::new();
    mock.expect_get(1)
        .return_ok(User::new(1, "Old", "old@x.io"));
    mock.expect_update(1)
        .return_ok(User::new(1, "New", "new@x.io"));

    let controller = controller_for(&mock);
    let result = controller.edit(1, UserForm::new("New", "new@x.io")).await;
    assert_eq!(result, Ok(ActionResult::RedirectToIndex));

    mock.verify();
}

#[tokio::test]
async fn invalid_forms_never_reach_the_actor() {
    // No expectations: any request would be recorded as a mismatch.
    let mock = MockClient::<User>::new();

    let controller = controller_for(&mock);
    let result = controller.create(UserForm::new(" ", "a@x.io")).await;
    assert!(matches!(result, Ok(ActionResult::InvalidForm { .. })));

    mock.verify();
}

#[tokio::test]
async fn search_passes_query_and_returns_replies() {
    let mut mock = MockClient::<User>::new();
    let hit = User::new(2, "Zoe", "zoe@x.io");
    mock.expect_search().return_ok(vec![hit.clone()]);

    let controller = controller_for(&mock);
    let result = controller.search(Some("zo".into())).await;
    assert_eq!(
        result,
        Ok(ActionResult::View(SearchView {
            query: Some("zo".into()),
            users: vec![hit],
        }))
    );

    mock.verify();
}

#[tokio::test]
async fn create_sends_form_fields_as_payload() {
    let (client, mut receiver) = mock::create_mock_client::<User>(4);
    let controller = UserController::new(UserClient::new(client));

    let pending = tokio::spawn(async move { controller.create(UserForm::new("Ann", "ann@x.io")).await });

    let (params, respond_to) = mock::expect_create(&mut receiver)
        .await
        .expect("expected a create request");
    assert_eq!(params, UserCreate::new("Ann", "ann@x.io"));
    respond_to.send(Ok(User::new(1, "Ann", "ann@x.io"))).unwrap();

    assert_eq!(pending.await.unwrap(), Ok(ActionResult::RedirectToIndex));
}

#[tokio::test]
async fn edit_sends_update_for_the_path_id() {
    let (client, mut receiver) = mock::create_mock_client::<User>(4);
    let controller = UserController::new(UserClient::new(client));

    let pending = tokio::spawn(async move { controller.edit(5, UserForm::new("Eve", "eve@x.io")).await });

    match receiver.recv().await {
        Some(user_directory::framework::ResourceRequest::Get { id, respond_to }) => {
            assert_eq!(id, 5);
            respond_to.send(Ok(User::new(5, "Old", "old@x.io"))).unwrap();
        }
        other => panic!("expected a get request, got {other:?}"),
    }

    let (id, update, respond_to) = mock::expect_update(&mut receiver)
        .await
        .expect("expected an update request");
    assert_eq!(id, 5);
    assert_eq!(update, UserUpdate::new("Eve", "eve@x.io"));
    respond_to.send(Ok(User::new(5, "Eve", "eve@x.io"))).unwrap();

    assert_eq!(pending.await.unwrap(), Ok(ActionResult::RedirectToIndex));
}

#[tokio::test]
async fn missing_query_is_sent_as_empty_string() {
    let (client, mut receiver) = mock::create_mock_client::<User>(4);
    let controller = UserController::new(UserClient::new(client));

    let pending = tokio::spawn(async move { controller.search(None).await });

    let (query, respond_to) = mock::expect_search(&mut receiver)
        .await
        .expect("expected a search request");
    assert_eq!(query, "");
    respond_to.send(Ok(vec![])).unwrap();

    assert_eq!(
        pending.await.unwrap(),
        Ok(ActionResult::View(SearchView {
            query: None,
            users: vec![],
        }))
    );
}
