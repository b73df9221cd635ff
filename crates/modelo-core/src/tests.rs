//! Action Integration Tests
//!
//! Drives refresh / save / delete against an in-memory mock backend.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;

    use crate::{
        delete, refresh, save, ApiError, ApiResult, DeleteOutcome, EditSession, FailureKind, Modelo,
        ModeloApi, ModeloDraft, ModeloField, ModeloId, ModeloState, SaveOutcome,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(ModeloDraft),
        Update(ModeloId, ModeloDraft),
        Delete(ModeloId),
    }

    /// In-memory stand-in for the REST backend
    #[derive(Default)]
    struct MockApi {
        records: RefCell<Vec<Modelo>>,
        next_id: Cell<u32>,
        calls: RefCell<Vec<Call>>,
        fail_list: Cell<bool>,
        fail_write: Cell<bool>,
        fail_delete: Cell<bool>,
        /// Runs while a create/update is "on the wire"
        during_write: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    impl MockApi {
        fn with_records(records: Vec<Modelo>) -> Self {
            let next = records
                .iter()
                .filter_map(|m| m.id.as_str().parse::<u32>().ok())
                .max()
                .unwrap_or(0)
                + 1;
            let api = Self::default();
            *api.records.borrow_mut() = records;
            api.next_id.set(next);
            api
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::List).count()
        }

        fn run_hook(&self) {
            if let Some(hook) = self.during_write.borrow_mut().take() {
                hook();
            }
        }

        fn failure() -> ApiError {
            ApiError::Status {
                status: 500,
                url: "http://localhost:3000/modelo".to_string(),
            }
        }
    }

    #[async_trait(?Send)]
    impl ModeloApi for MockApi {
        async fn list(&self) -> ApiResult<Vec<Modelo>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
            Ok(self.records.borrow().clone())
        }

        async fn create(&self, draft: &ModeloDraft) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Create(draft.clone()));
            self.run_hook();
            if self.fail_write.get() {
                return Err(Self::failure());
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.records.borrow_mut().push(record(id.into(), draft));
            Ok(())
        }

        async fn update(&self, id: &ModeloId, draft: &ModeloDraft) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Update(id.clone(), draft.clone()));
            self.run_hook();
            if self.fail_write.get() {
                return Err(Self::failure());
            }
            let mut records = self.records.borrow_mut();
            match records.iter_mut().find(|m| &m.id == id) {
                Some(existing) => {
                    *existing = record(id.clone(), draft);
                    Ok(())
                }
                None => Err(ApiError::Status {
                    status: 404,
                    url: format!("http://localhost:3000/modelo/{}", id),
                }),
            }
        }

        async fn delete(&self, id: &ModeloId) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id.clone()));
            if self.fail_delete.get() {
                return Err(Self::failure());
            }
            self.records.borrow_mut().retain(|m| &m.id != id);
            Ok(())
        }
    }

    fn record(id: ModeloId, draft: &ModeloDraft) -> Modelo {
        Modelo {
            id,
            name: draft.name.clone(),
            model_year: draft.model_year.clone(),
            quantity: draft.quantity.clone(),
            category_id: draft.category_id.clone(),
            brand_id: draft.brand_id.clone(),
        }
    }

    fn modelo(id: u32, name: &str) -> Modelo {
        keyed(id.into(), name)
    }

    fn keyed(id: ModeloId, name: &str) -> Modelo {
        Modelo {
            id,
            name: name.to_string(),
            model_year: "2020".to_string(),
            quantity: "3".to_string(),
            category_id: "1".to_string(),
            brand_id: "2".to_string(),
        }
    }

    fn seeded() -> (MockApi, RefCell<ModeloState>) {
        let api = MockApi::with_records(vec![modelo(3, "Gol"), modelo(7, "X"), modelo(9, "Uno")]);
        (api, RefCell::new(ModeloState::new()))
    }

    #[tokio::test]
    async fn test_refresh_mirrors_server() {
        let (api, state) = seeded();
        refresh(&api, &state).await;

        let state = state.borrow();
        assert_eq!(state.records(), api.records.borrow().as_slice());
        assert!(state.notification().is_empty());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_failure_before_first_load_stays_empty() {
        let (api, state) = seeded();
        api.fail_list.set(true);
        refresh(&api, &state).await;

        let state = state.borrow();
        assert!(state.records().is_empty());
        assert_eq!(state.notification().kind(), Some(FailureKind::Load));
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let (api, state) = seeded();
        refresh(&api, &state).await;
        let before = state.borrow().records().to_vec();

        api.records.borrow_mut().clear();
        api.fail_list.set(true);
        refresh(&api, &state).await;

        assert_eq!(state.borrow().records(), before.as_slice());
        assert_eq!(
            state.borrow().notification().message(),
            Some("Erro ao carregar os modelos.")
        );
    }

    #[tokio::test]
    async fn test_save_create_posts_and_resyncs() {
        let (api, state) = seeded();
        refresh(&api, &state).await;

        state.borrow_mut().open_create();
        state.borrow_mut().update_field(ModeloField::Name, "Onix".to_string());
        state.borrow_mut().update_field(ModeloField::ModelYear, "2024".to_string());

        let outcome = save(&api, &state).await;
        assert_eq!(outcome, Some(SaveOutcome::Saved));

        let calls = api.calls();
        assert!(matches!(&calls[1], Call::Create(d) if d.name == "Onix" && d.quantity.is_empty()));
        assert!(!calls.iter().any(|c| matches!(c, Call::Update(..))));
        assert_eq!(calls.last(), Some(&Call::List));

        let state = state.borrow();
        assert_eq!(state.session(), &EditSession::Closed);
        assert!(state.notification().is_empty());
        assert_eq!(state.records().len(), 4);
        assert_eq!(state.records()[3].name, "Onix");
    }

    #[tokio::test]
    async fn test_save_edit_puts_to_target_id() {
        let (api, state) = seeded();
        refresh(&api, &state).await;

        let target = state.borrow().records()[1].clone();
        state.borrow_mut().open_edit(&target);
        state.borrow_mut().update_field(ModeloField::Quantity, "12".to_string());

        save(&api, &state).await;

        let calls = api.calls();
        assert!(!calls.iter().any(|c| matches!(c, Call::Create(..))));
        assert!(matches!(
            &calls[1],
            Call::Update(id, d) if id.as_str() == "7" && d.quantity == "12" && d.name == "X"
        ));
        assert_eq!(state.borrow().records()[1].quantity, "12");
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_session_open() {
        let (api, state) = seeded();
        refresh(&api, &state).await;
        api.fail_write.set(true);

        state.borrow_mut().open_edit(&modelo(7, "X"));
        state.borrow_mut().update_field(ModeloField::Name, "Y".to_string());
        let before = state.borrow().session().clone();

        let outcome = save(&api, &state).await;

        assert_eq!(outcome, Some(SaveOutcome::Failed));
        assert_eq!(api.list_calls(), 1);
        let state = state.borrow();
        assert_eq!(state.session(), &before);
        assert_eq!(state.notification().kind(), Some(FailureKind::Save));
        assert!(!state.is_saving());
    }

    #[tokio::test]
    async fn test_retry_after_save_failure_uses_same_draft() {
        let (api, state) = seeded();
        api.fail_write.set(true);
        state.borrow_mut().open_create();
        state.borrow_mut().update_field(ModeloField::BrandId, "4".to_string());
        save(&api, &state).await;

        api.fail_write.set(false);
        assert_eq!(save(&api, &state).await, Some(SaveOutcome::Saved));

        let creates: Vec<_> = api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(creates.len(), 2);
        assert_eq!(creates[0], creates[1]);
        assert!(state.borrow().notification().is_empty());
    }

    #[tokio::test]
    async fn test_resync_failure_after_save_reports_load() {
        let (api, state) = seeded();
        api.fail_list.set(true);
        state.borrow_mut().open_create();

        save(&api, &state).await;

        let state = state.borrow();
        assert_eq!(state.session(), &EditSession::Closed);
        assert_eq!(state.notification().kind(), Some(FailureKind::Load));
    }

    #[tokio::test]
    async fn test_save_without_session_does_nothing() {
        let (api, state) = seeded();
        assert_eq!(save(&api, &state).await, None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_during_save_ignores_failure() {
        let api = MockApi::default();
        let state = Rc::new(RefCell::new(ModeloState::new()));
        api.fail_write.set(true);

        state.borrow_mut().open_create();
        let hook_state = Rc::clone(&state);
        *api.during_write.borrow_mut() = Some(Box::new(move || hook_state.borrow_mut().cancel()));

        let outcome = save(&api, &*state).await;

        assert_eq!(outcome, Some(SaveOutcome::Stale { persisted: false }));
        assert!(state.borrow().notification().is_empty());
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_reopen_during_save_keeps_new_session_but_resyncs() {
        let api = MockApi::with_records(vec![modelo(1, "A"), modelo(2, "B")]);
        let state = Rc::new(RefCell::new(ModeloState::new()));

        state.borrow_mut().open_edit(&modelo(1, "A"));
        state.borrow_mut().update_field(ModeloField::Name, "A2".to_string());
        let hook_state = Rc::clone(&state);
        *api.during_write.borrow_mut() =
            Some(Box::new(move || hook_state.borrow_mut().open_edit(&modelo(2, "B"))));

        let outcome = save(&api, &*state).await;

        assert_eq!(outcome, Some(SaveOutcome::Stale { persisted: true }));
        let state = state.borrow();
        assert_eq!(state.session().target_id(), Some(&ModeloId::from(2)));
        assert_eq!(state.session().draft().unwrap().name, "B");
        assert_eq!(state.records()[0].name, "A2");
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_list() {
        let (api, state) = seeded();
        refresh(&api, &state).await;
        let before = state.borrow().records().to_vec();
        api.fail_delete.set(true);

        let outcome = delete(&api, &state, ModeloId::from(3)).await;

        assert_eq!(outcome, Some(DeleteOutcome::Failed));
        assert_eq!(api.list_calls(), 1);
        let state = state.borrow();
        assert_eq!(state.records(), before.as_slice());
        assert_eq!(state.notification().message(), Some("Erro ao deletar o modelo."));
    }

    #[tokio::test]
    async fn test_delete_success_refreshes_once() {
        let (api, state) = seeded();
        refresh(&api, &state).await;

        let outcome = delete(&api, &state, ModeloId::from(3)).await;

        assert_eq!(outcome, Some(DeleteOutcome::Deleted));
        assert_eq!(
            api.calls(),
            vec![Call::List, Call::Delete(ModeloId::from(3)), Call::List]
        );
        let state = state.borrow();
        let ids: Vec<&str> = state.records().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "9"]);
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_open_session() {
        let (api, state) = seeded();
        state.borrow_mut().open_edit(&modelo(7, "X"));
        state.borrow_mut().update_field(ModeloField::Name, "editing".to_string());
        let before = state.borrow().session().clone();

        delete(&api, &state, ModeloId::from(3)).await;

        assert_eq!(state.borrow().session(), &before);
    }

    #[tokio::test]
    async fn test_string_ids_flow_through_edit_and_delete() {
        let api = MockApi::with_records(vec![
            keyed(ModeloId::from("c3f1"), "Uno"),
            modelo(4, "Gol"),
        ]);
        let state = RefCell::new(ModeloState::new());
        refresh(&api, &state).await;

        let target = state.borrow().records()[0].clone();
        state.borrow_mut().open_edit(&target);
        state.borrow_mut().update_field(ModeloField::Name, "Uno Way".to_string());
        assert_eq!(save(&api, &state).await, Some(SaveOutcome::Saved));

        let outcome = delete(&api, &state, ModeloId::from("c3f1")).await;

        assert_eq!(outcome, Some(DeleteOutcome::Deleted));
        let calls = api.calls();
        assert!(matches!(
            &calls[1],
            Call::Update(id, d) if id.as_str() == "c3f1" && d.name == "Uno Way"
        ));
        assert_eq!(calls[3], Call::Delete(ModeloId::from("c3f1")));
        let state = state.borrow();
        let ids: Vec<&str> = state.records().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
    }
}
