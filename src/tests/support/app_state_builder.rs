use actix_web::web;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::use_cases::{
    authorize_admin::IAuthorizeAdminUseCase, login_admin::ILoginAdminUseCase,
    logout_admin::ILogoutAdminUseCase,
};
use crate::content::adapter::outgoing::{LocalContentStore, NoopContactNotifier};
use crate::content::application::ports::outgoing::ContentStore;
use crate::content::application::services::SubmitContactService;
use crate::content::application::ContentUseCases;
use crate::media::adapter::outgoing::DataUrlStorage;
use crate::media::application::domain::UploadLimits;
use crate::media::application::services::UploadMediaService;
use crate::tests::support::stubs::*;
use crate::AppState;

const TEST_STORE_TIMEOUT: Duration = Duration::from_millis(500);

/// Real content and upload services over an in-memory store, stubbed auth.
pub struct TestAppStateBuilder {
    content_store: Arc<dyn ContentStore>,
    login_admin: Arc<dyn ILoginAdminUseCase>,
    logout_admin: Arc<dyn ILogoutAdminUseCase>,
    authorize_admin: Arc<dyn IAuthorizeAdminUseCase>,
    upload_limits: UploadLimits,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content_store: Arc::new(LocalContentStore::in_memory()),
            login_admin: Arc::new(StubLoginAdminUseCase),
            logout_admin: Arc::new(StubLogoutAdminUseCase),
            authorize_admin: Arc::new(StubAuthorizeAdminUseCase),
            upload_limits: UploadLimits::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_content_store(mut self, store: Arc<dyn ContentStore>) -> Self {
        self.content_store = store;
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(mut self, uc: impl ILogoutAdminUseCase + 'static) -> Self {
        self.logout_admin = Arc::new(uc);
        self
    }

    pub fn with_upload_limits(mut self, limits: UploadLimits) -> Self {
        self.upload_limits = limits;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let content = ContentUseCases::with_store(self.content_store.clone(), TEST_STORE_TIMEOUT);
        let submit_contact =
            SubmitContactService::new(content.messages.clone(), Arc::new(NoopContactNotifier));
        let upload_media = UploadMediaService::new(Arc::new(DataUrlStorage), self.upload_limits);

        web::Data::new(AppState {
            content,
            submit_contact: Arc::new(submit_contact),
            login_admin: self.login_admin,
            logout_admin: self.logout_admin,
            authorize_admin: self.authorize_admin,
            upload_media: Arc::new(upload_media),
            content_store: self.content_store,
        })
    }
}
