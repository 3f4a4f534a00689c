use crate::database::{model::project::ProjectRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ProjectId, ProviderId},
    project::{
        event::{CreateProject, UpdateProject},
        Project,
    },
};
use kernel::repository::project::ProjectRepository;
use shared::error::{AppError, AppResult};

const SELECT_PROJECTS: &str = r#"
    SELECT
        project_id, owner_id, title, description, category, role,
        tech_stack, repo_url, demo_url, created_at, updated_at
    FROM projects
"#;

#[derive(new)]
pub struct ProjectRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryImpl {
    async fn create(&self, event: CreateProject) -> AppResult<ProjectId> {
        let project_id = ProjectId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO projects
                (project_id, owner_id, title, description, category, role,
                tech_stack, repo_url, demo_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(project_id)
        .bind(event.owner_id)
        .bind(event.title)
        .bind(event.description)
        .bind(event.category.as_ref())
        .bind(event.role.as_ref())
        .bind(event.tech_stack)
        .bind(event.repo_url)
        .bind(event.demo_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No project record has been created".into(),
            ));
        }

        Ok(project_id)
    }

    async fn update(&self, event: UpdateProject) -> AppResult<()> {
        // a NULL parameter keeps the stored column
        let res = sqlx::query(
            r#"
                UPDATE projects SET
                    title = COALESCE($1, title),
                    description = COALESCE($2, description),
                    category = COALESCE($3, category),
                    role = COALESCE($4, role),
                    tech_stack = COALESCE($5, tech_stack),
                    repo_url = COALESCE($6, repo_url),
                    demo_url = COALESCE($7, demo_url),
                    updated_at = NOW()
                WHERE project_id = $8
            "#,
        )
        .bind(event.title)
        .bind(event.description)
        .bind(event.category.map(|c| c.as_ref().to_string()))
        .bind(event.role.map(|r| r.as_ref().to_string()))
        .bind(event.tech_stack)
        .bind(event.repo_url)
        .bind(event.demo_url)
        .bind(event.project_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Project {} does not exist",
                event.project_id
            )));
        }

        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &ProviderId) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_PROJECTS} WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Project::try_from)
        .collect()
    }

    async fn find_all(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, ProjectRow>(&format!("{SELECT_PROJECTS} ORDER BY created_at DESC"))
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }
}
