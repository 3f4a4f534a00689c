use std::sync::Arc;

use adapter::email::EmailSender;
use adapter::repository::{
    advisory::AdvisoryRepositoryImpl, portfolio::PortfolioRepositoryImpl,
    profile::ProfileRepositoryImpl, project::ProjectRepositoryImpl,
    schedule::ScheduleRepositoryImpl,
};
use adapter::{database::ConnectionPool, repository::health::HealthCheckRepositoryImpl};
use kernel::model::provider::ProviderAliases;
use kernel::repository::{
    advisory::AdvisoryRepository, health::HealthCheckRepository,
    notification::NotificationSender, portfolio::PortfolioRepository,
    profile::ProfileRepository, project::ProjectRepository, schedule::ScheduleRepository,
};
use kernel::service::advisory::AdvisoryService;
use shared::config::AppConfig;
use shared::error::AppResult;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    advisory_repository: Arc<dyn AdvisoryRepository>,
    project_repository: Arc<dyn ProjectRepository>,
    portfolio_repository: Arc<dyn PortfolioRepository>,
    advisory_service: AdvisoryService,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> AppResult<Self> {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let profile_repository: Arc<dyn ProfileRepository> =
            Arc::new(ProfileRepositoryImpl::new(pool.clone()));
        let schedule_repository: Arc<dyn ScheduleRepository> =
            Arc::new(ScheduleRepositoryImpl::new(pool.clone()));
        let advisory_repository: Arc<dyn AdvisoryRepository> =
            Arc::new(AdvisoryRepositoryImpl::new(pool.clone()));
        let project_repository = Arc::new(ProjectRepositoryImpl::new(pool.clone()));
        let portfolio_repository = Arc::new(PortfolioRepositoryImpl::new(pool.clone()));
        let notification_sender: Arc<dyn NotificationSender> =
            Arc::new(EmailSender::new(app_config.email)?);
        let advisory_service = AdvisoryService::new(
            advisory_repository.clone(),
            profile_repository.clone(),
            schedule_repository.clone(),
            notification_sender,
            Arc::new(ProviderAliases::new(app_config.provider_aliases)),
        );
        Ok(Self {
            health_check_repository,
            profile_repository,
            schedule_repository,
            advisory_repository,
            project_repository,
            portfolio_repository,
            advisory_service,
        })
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn profile_repository(&self) -> Arc<dyn ProfileRepository> {
        self.profile_repository.clone()
    }

    pub fn schedule_repository(&self) -> Arc<dyn ScheduleRepository> {
        self.schedule_repository.clone()
    }

    pub fn advisory_repository(&self) -> Arc<dyn AdvisoryRepository> {
        self.advisory_repository.clone()
    }

    pub fn project_repository(&self) -> Arc<dyn ProjectRepository> {
        self.project_repository.clone()
    }

    pub fn portfolio_repository(&self) -> Arc<dyn PortfolioRepository> {
        self.portfolio_repository.clone()
    }

    pub fn advisory_service(&self) -> &AdvisoryService {
        &self.advisory_service
    }
}
