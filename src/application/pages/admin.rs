// Admin console: sign in, list every spot, and create, edit or delete spots.
//
// Purpose
// - Drive the table and the form from the auth state and the live collection.
//
// Responsibilities
// - Follow the auth watch: signed in starts the subscription, signed out cancels it and clears the list.
// - Validate the form before any remote call. No optimistic updates: the next push shows the change.
// - Deleting needs a confirmation obtained from request_delete.
// - Failures become notices or the inline login error. The form is left as typed on failure.

use crate::application::errors::ApplicationError;
use crate::application::sync::collection_sync::{CollectionSync, SyncStatus};
use crate::core::messages;
use crate::core::ports::{AuthProvider, DocumentCollection, User};
use crate::core::projector::format::format_distance;
use crate::core::spot::category::category_icon;
use crate::core::spot::draft::{FormError, SpotDraft, SpotForm};
use crate::core::spot::model::Spot;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Login,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub id: String,
    pub name: String,
    pub location_text: String,
    pub category_label: String,
    pub category_icon: &'static str,
    pub distance: String,
    pub featured: &'static str,
}

impl AdminRow {
    fn new(spot: &Spot) -> Self {
        Self {
            id: spot.id.clone(),
            name: spot.display_name().to_string(),
            location_text: spot.location_text().to_string(),
            category_label: spot.category_label().to_string(),
            category_icon: category_icon(spot.category.as_ref()),
            distance: format_distance(spot.distance),
            featured: if spot.is_featured { "Ya" } else { "Tidak" },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn label(&self) -> &'static str {
        match self {
            FormMode::Create => messages::FORM_MODE_CREATE,
            FormMode::Edit(_) => messages::FORM_MODE_EDIT,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Simpan Spot",
            FormMode::Edit(_) => "Update Spot",
        }
    }
}

/// Proof that the user was asked before deleting. Only request_delete creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    id: String,
    prompt: String,
}

impl DeleteConfirmation {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Rejected(FormError),
    Failed,
    Disabled,
}

/// A validated create or update on its way to the collection.
#[must_use]
pub struct PendingSave<C: DocumentCollection> {
    collection: Arc<C>,
    collection_name: String,
    mode: FormMode,
    draft: SpotDraft,
}

impl<C: DocumentCollection> PendingSave<C> {
    pub async fn run(self) -> SaveResult {
        SaveResult(self.save().await)
    }

    async fn save(&self) -> Result<&'static str, ApplicationError> {
        match &self.mode {
            FormMode::Edit(id) => {
                self.collection
                    .update(&self.collection_name, id, self.draft.to_fields())
                    .await?;
                tracing::info!(%id, "spot updated");
                Ok(messages::SPOT_UPDATED)
            }
            FormMode::Create => {
                let id = self
                    .collection
                    .create(&self.collection_name, self.draft.to_fields())
                    .await?;
                tracing::info!(%id, "spot created");
                Ok(messages::SPOT_CREATED)
            }
        }
    }
}

/// What a PendingSave came back with, handed to `AdminPage::finish_submit`.
#[derive(Debug)]
pub struct SaveResult(Result<&'static str, ApplicationError>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminView {
    pub section: AdminSection,
    pub admin_email: String,
    pub notice: Option<Notice>,
    pub login_error: Option<String>,
    pub count_text: String,
    pub rows: Vec<AdminRow>,
    pub empty_table: Option<&'static str>,
    pub form: SpotForm,
    pub form_mode: FormMode,
    pub submit_enabled: bool,
}

pub struct AdminPage<C: DocumentCollection, A: AuthProvider> {
    sync: CollectionSync<C>,
    auth: Arc<A>,
    auth_state: watch::Receiver<Option<User>>,
    user: Option<User>,
    form: SpotForm,
    mode: FormMode,
    notice: Option<Notice>,
    login_error: Option<String>,
    submitting: bool,
}

enum Event {
    Auth(bool),
    Push(bool),
    Idle,
}

impl<C: DocumentCollection, A: AuthProvider> AdminPage<C, A> {
    pub fn new(collection: Arc<C>, collection_name: impl Into<String>, auth: Arc<A>) -> Self {
        let auth_state = auth.on_auth_state_change();
        Self {
            sync: CollectionSync::new(collection, collection_name),
            auth,
            auth_state,
            user: None,
            form: SpotForm::default(),
            mode: FormMode::Create,
            notice: None,
            login_error: None,
            submitting: false,
        }
    }

    /// Applies the current auth state, as the provider delivers it on registration.
    pub async fn start(&mut self) {
        let user = self.auth_state.borrow_and_update().clone();
        self.on_auth_state(user).await;
    }

    /// Applies a pending auth transition and every delivered push. Returns how many were applied.
    pub async fn pump(&mut self) -> usize {
        let mut applied = 0;
        if self.auth_state.has_changed().unwrap_or(false) {
            let user = self.auth_state.borrow_and_update().clone();
            self.on_auth_state(user).await;
            applied += 1;
        }
        let was_failed = self.sync.is_failed();
        applied += self.sync.pump();
        self.note_failure(was_failed);
        applied
    }

    /// Waits for the next auth transition or push. `false` when neither can arrive any more.
    pub async fn next(&mut self) -> bool {
        let was_failed = self.sync.is_failed();
        let subscribed = self.sync.is_subscribed();
        let event = tokio::select! {
            changed = self.auth_state.changed() => Event::Auth(changed.is_ok()),
            applied = self.sync.next(), if subscribed => Event::Push(applied),
            else => Event::Idle,
        };
        match event {
            Event::Auth(true) => {
                let user = self.auth_state.borrow_and_update().clone();
                self.on_auth_state(user).await;
                true
            }
            Event::Push(applied) => {
                self.note_failure(was_failed);
                applied
            }
            Event::Auth(false) | Event::Idle => false,
        }
    }

    async fn on_auth_state(&mut self, user: Option<User>) {
        match user {
            Some(user) => {
                tracing::info!(uid = %user.uid, "admin signed in");
                self.user = Some(user);
                self.notice = Some(Notice::success(messages::SIGNED_IN));
                self.sync.start().await;
            }
            None => {
                tracing::info!("admin signed out");
                self.user = None;
                self.sync.clear();
            }
        }
    }

    fn note_failure(&mut self, was_failed: bool) {
        if was_failed {
            return;
        }
        if let SyncStatus::Failed(message) = self.sync.status() {
            self.notice = Some(Notice::error(messages::admin_load_failed(message)));
        }
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) {
        self.login_error = None;
        let (email, password) = (email.trim(), password.trim());
        if email.is_empty() || password.is_empty() {
            return;
        }
        match self.auth.sign_in(email, password).await {
            Ok(_) => {
                self.pump().await;
            }
            Err(err) => {
                tracing::error!(code = %err.code, "sign in failed");
                self.login_error = Some(messages::sign_in_failed(&err.code));
            }
        }
    }

    pub async fn sign_out(&mut self) {
        match self.auth.sign_out().await {
            Ok(()) => {
                self.pump().await;
                self.notice = Some(Notice::success(messages::SIGNED_OUT));
            }
            Err(err) => {
                tracing::error!(error = %err, "sign out failed");
                self.notice = Some(Notice::error(messages::sign_out_failed(&err.to_string())));
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn sync(&self) -> &CollectionSync<C> {
        &self.sync
    }

    pub fn form(&self) -> &SpotForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SpotForm {
        &mut self.form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Prefills the form from a listed spot. `false` if the id is not in the list.
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(spot) = self.sync.find(id) else {
            return false;
        };
        self.form = SpotForm::from_spot(spot);
        self.mode = FormMode::Edit(spot.id.clone());
        true
    }

    pub fn reset_form(&mut self) {
        self.form = SpotForm::default();
        self.mode = FormMode::Create;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn request_delete(&self, id: &str) -> Option<DeleteConfirmation> {
        self.user.as_ref()?;
        let name = self.sync.find(id).map(Spot::alt_text).unwrap_or("");
        Some(DeleteConfirmation {
            id: id.to_string(),
            prompt: messages::confirm_delete(name),
        })
    }

    pub async fn confirm_delete(&mut self, confirmation: DeleteConfirmation) -> bool {
        let result = match self.ensure_writable() {
            Ok(()) => self
                .sync
                .collection()
                .delete(self.sync.name(), &confirmation.id)
                .await
                .map_err(ApplicationError::from),
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                tracing::info!(id = %confirmation.id, "spot deleted");
                self.notice = Some(Notice::success(messages::SPOT_DELETED));
                true
            }
            Err(err) => {
                tracing::error!(id = %confirmation.id, error = %err, "delete failed");
                self.notice = Some(Notice::error(messages::delete_failed(&err.to_string())));
                false
            }
        }
    }

    /// Validates the form and saves it in one go.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(pending) => {
                let result = pending.run().await;
                self.finish_submit(result)
            }
            Err(outcome) => outcome,
        }
    }

    /// Validates the form and hands the save off. Until the result is passed to
    /// `finish_submit` the submit control stays disabled and further submits are refused.
    pub fn begin_submit(&mut self) -> Result<PendingSave<C>, SubmitOutcome> {
        let draft = match self
            .ensure_writable()
            .and_then(|()| self.form.validate().map_err(ApplicationError::from))
        {
            Ok(draft) => draft,
            Err(ApplicationError::Validation(err)) => {
                self.notice = Some(Notice::error(err.to_string()));
                return Err(SubmitOutcome::Rejected(err));
            }
            Err(err) => {
                tracing::warn!(error = %err, "submit ignored");
                return Err(SubmitOutcome::Disabled);
            }
        };

        self.submitting = true;
        Ok(PendingSave {
            collection: Arc::clone(self.sync.collection()),
            collection_name: self.sync.name().to_string(),
            mode: self.mode.clone(),
            draft,
        })
    }

    pub fn finish_submit(&mut self, result: SaveResult) -> SubmitOutcome {
        self.submitting = false;
        match result.0 {
            Ok(text) => {
                self.reset_form();
                self.notice = Some(Notice::success(text));
                SubmitOutcome::Saved
            }
            Err(err) => {
                tracing::error!(error = %err, "save failed");
                self.notice = Some(Notice::error(messages::save_failed(&err.to_string())));
                SubmitOutcome::Failed
            }
        }
    }

    fn ensure_writable(&self) -> Result<(), ApplicationError> {
        if self.user.is_none() {
            return Err(ApplicationError::ControlsDisabled("signed out".to_string()));
        }
        if self.submitting {
            return Err(ApplicationError::ControlsDisabled("a save is in flight".to_string()));
        }
        if let SyncStatus::Failed(message) = self.sync.status() {
            return Err(ApplicationError::ControlsDisabled(message.clone()));
        }
        Ok(())
    }

    pub fn view(&self) -> AdminView {
        let spots = self.sync.spots();
        AdminView {
            section: match self.user {
                Some(_) => AdminSection::Admin,
                None => AdminSection::Login,
            },
            admin_email: match &self.user {
                Some(user) => user.email.clone().unwrap_or_else(|| messages::NO_EMAIL.to_string()),
                None => String::new(),
            },
            notice: self.notice.clone(),
            login_error: self.login_error.clone(),
            count_text: messages::registered_spots(spots.len()),
            rows: spots.iter().map(AdminRow::new).collect(),
            empty_table: spots.is_empty().then_some(messages::EMPTY_TABLE),
            form: self.form.clone(),
            form_mode: self.mode.clone(),
            submit_enabled: self.ensure_writable().is_ok(),
        }
    }
}

#[cfg(test)]
mod admin_page_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_auth::InMemoryAuthProvider;
    use crate::adapters::in_memory::in_memory_collection::InMemoryDocumentCollection;
    use crate::test_support::fixtures::collections::ClosingCollection;
    use crate::test_support::fixtures::documents::SpotDocumentBuilder;
    use crate::test_support::fixtures::forms::SpotFormBuilder;
    use rstest::{fixture, rstest};

    type Page = AdminPage<InMemoryDocumentCollection, InMemoryAuthProvider>;

    struct Context {
        collection: Arc<InMemoryDocumentCollection>,
        auth: Arc<InMemoryAuthProvider>,
        page: Page,
    }

    #[fixture]
    fn before_each() -> Context {
        let collection = Arc::new(InMemoryDocumentCollection::new());
        let auth = Arc::new(InMemoryAuthProvider::new().with_account("admin@kampus.id", "rahasia"));
        let page = AdminPage::new(Arc::clone(&collection), "spots", Arc::clone(&auth));
        Context {
            collection,
            auth,
            page,
        }
    }

    async fn signed_in(context: &mut Context) {
        context.page.start().await;
        context.page.sign_in("admin@kampus.id", "rahasia").await;
        context.page.pump().await;
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_on_the_login_section(before_each: Context) {
        let Context { mut page, .. } = before_each;
        page.start().await;
        let view = page.view();
        assert_eq!(view.section, AdminSection::Login);
        assert_eq!(view.count_text, "0 spot terdaftar.");
        assert_eq!(view.empty_table, Some(messages::EMPTY_TABLE));
        assert!(!view.submit_enabled);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_sign_in_and_list_the_spots(mut before_each: Context) {
        before_each
            .collection
            .put("spots", SpotDocumentBuilder::new().id("spot-1").build())
            .await;
        signed_in(&mut before_each).await;

        let view = before_each.page.view();
        assert_eq!(view.section, AdminSection::Admin);
        assert_eq!(view.admin_email, "admin@kampus.id");
        assert_eq!(view.notice, Some(Notice::success("Berhasil login sebagai admin.")));
        assert_eq!(view.count_text, "1 spot terdaftar.");
        assert_eq!(view.rows[0].id, "spot-1");
        assert_eq!(view.rows[0].featured, "Ya");
        assert_eq!(view.form_mode.label(), "Mode: tambah spot baru");
        assert!(view.submit_enabled);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ignore_blank_credentials(before_each: Context) {
        let Context { auth, mut page, .. } = before_each;
        page.start().await;
        page.sign_in("   ", "rahasia").await;
        assert_eq!(auth.current_user(), None);
        assert_eq!(page.view().login_error, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_show_the_error_code_on_a_failed_sign_in(before_each: Context) {
        let Context {
            collection,
            mut page,
            ..
        } = before_each;
        page.start().await;
        page.sign_in("admin@kampus.id", "salah").await;

        let view = page.view();
        assert_eq!(
            view.login_error.as_deref(),
            Some("Gagal login: auth/invalid-credential")
        );
        assert_eq!(view.section, AdminSection::Login);
        assert_eq!(view.notice, None);
        assert_eq!(collection.active_subscriptions().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_the_list_on_sign_out(mut before_each: Context) {
        before_each
            .collection
            .put("spots", SpotDocumentBuilder::new().id("spot-1").build())
            .await;
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;

        page.sign_out().await;
        let view = page.view();
        assert_eq!(view.section, AdminSection::Login);
        assert!(view.rows.is_empty());
        assert_eq!(view.notice, Some(Notice::success("Berhasil logout.")));
        assert_eq!(collection.active_subscriptions().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_incomplete_form_without_a_remote_call(mut before_each: Context) {
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;
        *page.form_mut() = SpotFormBuilder::new().name(" ").build();

        let outcome = page.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(
            page.view().notice,
            Some(Notice::error("Nama, kategori, jarak, dan URL gambar wajib diisi."))
        );
        assert_eq!(collection.len("spots").await, 0);
        assert_eq!(page.form().name, " ");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_then_edit_a_spot(mut before_each: Context) {
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;

        *page.form_mut() = SpotFormBuilder::new().build();
        assert_eq!(page.submit().await, SubmitOutcome::Saved);
        assert_eq!(
            page.view().notice,
            Some(Notice::success("Spot baru berhasil ditambahkan."))
        );
        assert_eq!(page.form(), &SpotForm::default());
        page.pump().await;
        let id = page.view().rows[0].id.clone();

        assert!(page.edit(&id));
        assert_eq!(page.view().form_mode.label(), "Mode: edit spot");
        page.form_mut().name = "Kopi Baru".to_string();
        assert_eq!(page.submit().await, SubmitOutcome::Saved);
        assert_eq!(page.mode(), &FormMode::Create);
        page.pump().await;
        assert_eq!(page.view().rows[0].name, "Kopi Baru");
        assert_eq!(collection.len("spots").await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_form_when_saving_fails(mut before_each: Context) {
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;
        let form = SpotFormBuilder::new().build();
        *page.form_mut() = form.clone();
        collection.toggle_offline();

        assert_eq!(page.submit().await, SubmitOutcome::Failed);
        let notice = page.view().notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.starts_with("Gagal menyimpan spot: "));
        assert_eq!(page.form(), &form);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_only_with_a_confirmation(mut before_each: Context) {
        before_each
            .collection
            .put("spots", SpotDocumentBuilder::new().id("spot-1").build())
            .await;
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;

        let confirmation = page.request_delete("spot-1").unwrap();
        assert_eq!(confirmation.prompt(), "Yakin ingin menghapus spot \"Warung Bu Sri\"?");
        assert_eq!(collection.len("spots").await, 1);

        assert!(page.confirm_delete(confirmation).await);
        assert_eq!(page.view().notice, Some(Notice::success("Spot berhasil dihapus.")));
        page.pump().await;
        assert!(page.view().rows.is_empty());
        assert_eq!(collection.len("spots").await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_disable_writes_after_a_subscription_failure(mut before_each: Context) {
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;
        collection.break_subscriptions("permission-denied").await;
        page.pump().await;

        let view = page.view();
        assert_eq!(
            view.notice,
            Some(Notice::error("Gagal memuat data spot: permission-denied"))
        );
        assert!(!view.submit_enabled);
        *page.form_mut() = SpotFormBuilder::new().build();
        assert_eq!(page.submit().await, SubmitOutcome::Disabled);
        assert_eq!(collection.len("spots").await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_wait_for_the_next_push(mut before_each: Context) {
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;
        collection
            .put("spots", SpotDocumentBuilder::new().id("spot-9").build())
            .await;
        assert!(page.next().await);
        assert_eq!(page.view().rows.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_second_submit_while_a_save_is_in_flight(mut before_each: Context) {
        signed_in(&mut before_each).await;
        let Context {
            collection,
            mut page,
            ..
        } = before_each;
        *page.form_mut() = SpotFormBuilder::new().build();

        let pending = page.begin_submit().expect("form is valid");
        assert!(!page.view().submit_enabled);
        assert!(matches!(page.begin_submit(), Err(SubmitOutcome::Disabled)));
        assert_eq!(collection.len("spots").await, 0);

        let result = pending.run().await;
        assert_eq!(page.finish_submit(result), SubmitOutcome::Saved);
        assert!(page.view().submit_enabled);
        assert_eq!(collection.len("spots").await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_disable_writes_when_the_store_drops_the_stream() {
        let collection = Arc::new(ClosingCollection::new(vec![
            SpotDocumentBuilder::new().id("spot-1").build(),
        ]));
        let auth = Arc::new(InMemoryAuthProvider::new().with_account("admin@kampus.id", "rahasia"));
        let mut page = AdminPage::new(collection, "spots", auth);
        page.start().await;
        page.sign_in("admin@kampus.id", "rahasia").await;
        page.pump().await;

        let view = page.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(
            view.notice,
            Some(Notice::error("Gagal memuat data spot: subscription closed"))
        );
        assert!(!view.submit_enabled);
    }
}
