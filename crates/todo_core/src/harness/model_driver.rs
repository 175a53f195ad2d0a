//! In-process driver over `TodoService`.

use crate::harness::driver::{HarnessError, HarnessResult, TodoDriver};
use crate::model::filter::Filter;
use crate::model::item::{Item, ItemId};
use crate::repo::slot_repo::{MemorySlotRepository, SlotRepository};
use crate::service::todo_service::{Intent, ServiceError, TodoService};

impl From<ServiceError> for HarnessError {
    fn from(value: ServiceError) -> Self {
        Self::Driver(value.to_string())
    }
}

/// Drives the command processor directly, without a rendering layer.
pub struct ModelDriver<R: SlotRepository> {
    service: TodoService<R>,
}

impl ModelDriver<MemorySlotRepository> {
    /// Fresh session over empty process-local storage.
    pub fn in_memory(slot_key: &str) -> Self {
        Self::new(MemorySlotRepository::new(), slot_key)
    }
}

impl<R: SlotRepository> ModelDriver<R> {
    pub fn new(repo: R, slot_key: &str) -> Self {
        Self {
            service: TodoService::open(repo, slot_key),
        }
    }

    pub fn service(&self) -> &TodoService<R> {
        &self.service
    }

    fn visible_id(&self, index: usize) -> HarnessResult<ItemId> {
        let view = self.service.view();
        view.items
            .get(index)
            .map(|row| row.id)
            .ok_or(HarnessError::NoSuchRow {
                index,
                visible: view.items.len(),
            })
    }

    fn editing_id(&self) -> HarnessResult<ItemId> {
        self.service
            .editing()
            .map(|session| session.id)
            .ok_or(HarnessError::NotEditing)
    }

    fn apply(&mut self, intent: Intent) -> HarnessResult<()> {
        self.service.apply(intent)?;
        Ok(())
    }
}

impl<R: SlotRepository> TodoDriver for ModelDriver<R> {
    fn add(&mut self, text: &str) -> HarnessResult<()> {
        self.service.set_new_todo_input(text);
        self.apply(Intent::Add(text.to_string()))
    }

    fn toggle_at(&mut self, index: usize) -> HarnessResult<()> {
        let id = self.visible_id(index)?;
        self.apply(Intent::ToggleOne(id))
    }

    fn set_all(&mut self, completed: bool) -> HarnessResult<()> {
        self.apply(Intent::ToggleAll(completed))
    }

    fn begin_edit_at(&mut self, index: usize) -> HarnessResult<()> {
        let id = self.visible_id(index)?;
        self.apply(Intent::BeginEdit(id))
    }

    fn type_edit(&mut self, text: &str) -> HarnessResult<()> {
        self.editing_id()?;
        self.service.set_edit_draft(text);
        Ok(())
    }

    fn commit_edit(&mut self) -> HarnessResult<()> {
        let session = self.service.editing().cloned().ok_or(HarnessError::NotEditing)?;
        self.apply(Intent::EditCommit {
            id: session.id,
            text: session.draft,
        })
    }

    fn cancel_edit(&mut self) -> HarnessResult<()> {
        let id = self.editing_id()?;
        self.apply(Intent::EditCancel(id))
    }

    fn destroy_at(&mut self, index: usize) -> HarnessResult<()> {
        let id = self.visible_id(index)?;
        self.apply(Intent::Destroy(id))
    }

    fn clear_completed(&mut self) -> HarnessResult<()> {
        self.apply(Intent::ClearCompleted)
    }

    fn select_filter(&mut self, filter: Filter) -> HarnessResult<()> {
        self.apply(Intent::SetFilter(filter))
    }

    fn back(&mut self) -> HarnessResult<()> {
        self.apply(Intent::NavigateBack)
    }

    fn forward(&mut self) -> HarnessResult<()> {
        self.apply(Intent::NavigateForward)
    }

    fn reload(&mut self) -> HarnessResult<()> {
        self.service.reload();
        Ok(())
    }

    fn labels(&self) -> HarnessResult<Vec<String>> {
        Ok(self
            .service
            .view()
            .items
            .into_iter()
            .map(|row| row.title)
            .collect())
    }

    fn completed_flags(&self) -> HarnessResult<Vec<bool>> {
        Ok(self
            .service
            .view()
            .items
            .iter()
            .map(|row| row.completed)
            .collect())
    }

    fn counter_text(&self) -> HarnessResult<Option<String>> {
        let view = self.service.view();
        Ok(view.show_main.then_some(view.remaining_label))
    }

    fn clear_completed_visible(&self) -> HarnessResult<bool> {
        Ok(self.service.view().show_clear_completed)
    }

    fn toggle_all_checked(&self) -> HarnessResult<bool> {
        Ok(self.service.view().all_completed)
    }

    fn selected_filter(&self) -> HarnessResult<Filter> {
        Ok(self.service.filter())
    }

    fn new_todo_value(&self) -> HarnessResult<String> {
        Ok(self.service.new_todo_input().to_string())
    }

    fn editing_index(&self) -> HarnessResult<Option<usize>> {
        Ok(self.service.view().items.iter().position(|row| row.editing))
    }

    fn persisted_items(&self) -> HarnessResult<Vec<Item>> {
        Ok(self.service.persisted_items())
    }
}
