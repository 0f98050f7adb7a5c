//! Account registration, login, and profile management.

use std::sync::Arc;

use tracing::info;

use villacare_auth::password::hasher::PasswordHasher;
use villacare_auth::password::validator::PasswordValidator;
use villacare_auth::session::store::SessionStore;
use villacare_core::error::AppError;
use villacare_database::repositories::package::PackageRepository;
use villacare_database::repositories::profile::ProfileRepository;
use villacare_database::repositories::user::UserRepository;
use villacare_entity::package::Package;
use villacare_entity::profile::{UpdateProfile, UserProfile};
use villacare_entity::user::UserRole;
use villacare_entity::user::model::{CreateUser, User};

use crate::context::RequestContext;

/// Request to register a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

/// Request to log in.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// A successful login: the user and their one-time-visible token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// The plaintext bearer token for subsequent requests.
    pub token: String,
}

/// Manages registration, sessions, profiles, and packages.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Package repository.
    package_repo: Arc<PackageRepository>,
    /// Session store.
    sessions: SessionStore,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Password policy validator.
    password_policy: PasswordValidator,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        profile_repo: Arc<ProfileRepository>,
        package_repo: Arc<PackageRepository>,
        sessions: SessionStore,
        hasher: PasswordHasher,
        password_policy: PasswordValidator,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            package_repo,
            sessions,
            hasher,
            password_policy,
        }
    }

    /// Registers a new resident account with an empty profile.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if req.username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        self.password_policy.validate(&req.password)?;

        if self.user_repo.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                req.username
            )));
        }
        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: req.username,
                email: req.email,
                password_hash,
                first_name: req.first_name,
                last_name: req.last_name,
                role: UserRole::Resident,
            })
            .await?;

        self.profile_repo.get_or_create(user.id).await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Authenticates a user and opens a session.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to
    /// the caller.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !self.hasher.verify_password(&req.password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid username or password"));
        }

        let (_session, token) = self.sessions.open_session(user.id).await?;
        self.user_repo.update_last_login(user.id).await?;

        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(LoginOutcome { user, token })
    }

    /// Closes the caller's current session.
    pub async fn logout(&self, ctx: &RequestContext) -> Result<(), AppError> {
        self.sessions.close_session(ctx.session_id).await?;
        info!(user_id = %ctx.user_id, "User logged out");
        Ok(())
    }

    /// Returns the caller's user record.
    pub async fn current_user(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))
    }

    /// Returns the caller's profile, creating an empty one on first
    /// access.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<UserProfile, AppError> {
        self.profile_repo.get_or_create(ctx.user_id).await
    }

    /// Updates the caller's profile. A referenced package must exist.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateProfile,
    ) -> Result<UserProfile, AppError> {
        if let Some(package_id) = data.package_id
            && self.package_repo.find_by_id(package_id).await?.is_none()
        {
            return Err(AppError::not_found("Package not found"));
        }

        self.profile_repo.get_or_create(ctx.user_id).await?;
        let profile = self.profile_repo.update(ctx.user_id, &data).await?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(profile)
    }

    /// Lists all subscription packages. Public.
    pub async fn list_packages(&self) -> Result<Vec<Package>, AppError> {
        self.package_repo.find_all().await
    }
}
