use viewer_framework::mock::{create_mock_client, expect_apply, expect_snapshot};
use viewer_framework::{spawn_store, StateClient, StateStore, StoreClient, StoreError, StoreState};

// --- Test State ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Pointer {
    x: i32,
    y: i32,
    moves: u32,
}

#[derive(Debug)]
enum PointerMutation {
    MoveTo(i32, i32),
    Teleport(i32, i32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Coordinates out of bounds: ({0}, {1})")]
struct OutOfBounds(i32, i32);

impl StoreState for Pointer {
    type Mutation = PointerMutation;
    type Error = OutOfBounds;

    fn apply(&mut self, mutation: PointerMutation) -> Result<bool, OutOfBounds> {
        match mutation {
            PointerMutation::MoveTo(x, y) => {
                if (self.x, self.y) == (x, y) {
                    return Ok(false);
                }
                self.x = x;
                self.y = y;
                self.moves += 1;
                Ok(true)
            }
            // Mutates before validating, so a rejection would leak without copy-on-apply.
            PointerMutation::Teleport(x, y) => {
                self.moves += 1;
                if x < 0 || y < 0 {
                    return Err(OutOfBounds(x, y));
                }
                self.x = x;
                self.y = y;
                Ok(true)
            }
        }
    }
}

struct PointerClient {
    inner: StoreClient<Pointer>,
}

impl StateClient<Pointer> for PointerClient {
    type Error = String;

    fn inner(&self) -> &StoreClient<Pointer> {
        &self.inner
    }

    fn map_error(e: StoreError) -> String {
        e.to_string()
    }
}

#[tokio::test]
async fn test_store_apply_and_snapshot() {
    let (store, client) = StateStore::new(Pointer::default(), 8);
    let handle = tokio::spawn(store.run());

    assert!(client.apply(PointerMutation::MoveTo(10, 20)).await.unwrap());
    assert!(!client.apply(PointerMutation::MoveTo(10, 20)).await.unwrap());

    let state = client.snapshot().await.unwrap();
    assert_eq!(
        state,
        Pointer {
            x: 10,
            y: 20,
            moves: 1
        }
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_mutation_leaves_state_untouched() {
    let (client, handle) = spawn_store(Pointer::default(), 8);

    let err = client
        .apply(PointerMutation::Teleport(-1, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::StateError(_)));
    assert!(err.to_string().contains("out of bounds"));

    assert_eq!(client.snapshot().await.unwrap(), Pointer::default());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_subscribers_see_changes_but_not_no_ops() {
    let (client, handle) = spawn_store(Pointer::default(), 8);
    let wrapper = PointerClient {
        inner: client.clone(),
    };
    let mut updates = wrapper.subscribe().await.unwrap();

    client.apply(PointerMutation::MoveTo(1, 1)).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().x, 1);

    // No-op: nothing published.
    client.apply(PointerMutation::MoveTo(1, 1)).await.unwrap();
    assert!(!updates.has_changed().unwrap());

    client.apply(PointerMutation::MoveTo(2, 3)).await.unwrap();
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().y, 3);

    drop(wrapper);
    drop(client);
    handle.await.unwrap();

    // Store gone: the channel reports closure.
    assert!(updates.changed().await.is_err());
}

#[tokio::test]
async fn test_closed_store_reports_store_closed() {
    let (store, client) = StateStore::new(Pointer::default(), 1);
    drop(store);

    let err = client.snapshot().await.unwrap_err();
    assert!(matches!(err, StoreError::StoreClosed));
}

#[tokio::test]
async fn test_client_against_mock_channel() {
    let (client, mut receiver) = create_mock_client::<Pointer>(4);

    let task = tokio::spawn(async move {
        let changed = client.apply(PointerMutation::MoveTo(7, 8)).await?;
        let state = client.snapshot().await?;
        Ok::<_, StoreError>((changed, state))
    });

    let (mutation, responder) = expect_apply(&mut receiver)
        .await
        .expect("Expected Apply request");
    assert!(matches!(mutation, PointerMutation::MoveTo(7, 8)));
    responder.send(Ok(true)).unwrap();

    let responder = expect_snapshot(&mut receiver)
        .await
        .expect("Expected Snapshot request");
    responder
        .send(Ok(Pointer {
            x: 7,
            y: 8,
            moves: 1,
        }))
        .unwrap();

    let (changed, state) = task.await.unwrap().unwrap();
    assert!(changed);
    assert_eq!(state.moves, 1);
}
