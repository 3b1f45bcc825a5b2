use actor_framework::{ActorEntity, ChangeEvent, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Tab {
    id: u32,
    label: String,
    covers: u32,
}

#[derive(Debug)]
struct TabCreate {
    label: String,
}

#[derive(Debug)]
struct TabUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum TabAction {
    AddCover,
    RemoveCover,
}

#[derive(Debug, thiserror::Error)]
enum TabError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("no covers to remove")]
    NoCovers,
}

#[async_trait]
impl ActorEntity for Tab {
    type Id = u32;
    type Create = TabCreate;
    type Update = TabUpdate;
    type Action = TabAction;
    type ActionResult = u32;
    type Context = ();
    type Error = TabError;

    fn from_create_params(id: u32, params: TabCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(TabError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            covers: 0,
        })
    }

    async fn on_update(&mut self, update: TabUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            if label.is_empty() {
                return Err(TabError::EmptyLabel);
            }
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TabAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            TabAction::AddCover => self.covers += 1,
            TabAction::RemoveCover => {
                // Mutate first so the test can prove the store keeps the old row.
                self.label.push('!');
                if self.covers == 0 {
                    return Err(TabError::NoCovers);
                }
                self.covers -= 1;
            }
        }
        Ok(self.covers)
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let id: u32 = client
        .create(TabCreate {
            label: "Table 4".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let covers = client.perform_action(id, TabAction::AddCover).await.unwrap();
    assert_eq!(covers, 1);

    let updated = client
        .update(
            id,
            TabUpdate {
                label: Some("Patio".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "Patio");

    let rows = client.list().await.unwrap();
    assert_eq!(rows, vec![updated]);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_writes_leave_rows_untouched() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create(TabCreate {
            label: "Bar".into(),
        })
        .await
        .unwrap();

    let err = client
        .update(
            id,
            TabUpdate {
                label: Some(String::new()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    let err = client
        .perform_action(id, TabAction::RemoveCover)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    let row = client.get(id).await.unwrap().unwrap();
    assert_eq!(row.label, "Bar");
    assert_eq!(row.covers, 0);

    let missing = client.update(99, TabUpdate { label: None }).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));

    let rejected = client.create(TabCreate { label: String::new() }).await;
    assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
}

#[tokio::test]
async fn test_change_events_follow_committed_writes() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));
    let mut changes = client.subscribe();

    let id = client
        .create(TabCreate {
            label: "Window".into(),
        })
        .await
        .unwrap();
    // A rejected action must not be announced.
    let _ = client.perform_action(id, TabAction::RemoveCover).await;
    client.perform_action(id, TabAction::AddCover).await.unwrap();
    client.delete(id).await.unwrap();

    assert_eq!(changes.recv().await.unwrap(), ChangeEvent::Created(id));
    assert_eq!(changes.recv().await.unwrap(), ChangeEvent::Updated(id));
    assert_eq!(changes.recv().await.unwrap(), ChangeEvent::Deleted(id));
    assert!(changes.try_recv().is_err());
}

#[tokio::test]
async fn test_actor_stops_when_clients_drop() {
    let (actor, client) = ResourceActor::<Tab>::new(4);
    let handle = tokio::spawn(actor.run(()));

    drop(client);
    handle.await.unwrap();
}
