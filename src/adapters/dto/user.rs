use super::Mapper;
use crate::domain::model::{AuthSession, Credentials, ProfileUpdate, Registration, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
}

pub struct UserMapper;

impl Mapper for UserMapper {
    type Dto = UserDto;
    type Domain = User;

    fn to_domain(dto: UserDto) -> User {
        User {
            id: dto.id,
            email: dto.email,
            display_name: dto.display_name,
            avatar_url: dto.avatar_url,
            is_email_verified: dto.is_email_verified,
            created_at: dto.created_at,
        }
    }

    fn to_dto(user: &User) -> UserDto {
        UserDto {
            id: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            avatar_url: user.avatar_url.clone(),
            is_email_verified: user.is_email_verified,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub access_token: String,
    pub user: UserDto,
}

impl From<AuthResponseDto> for AuthSession {
    fn from(dto: AuthResponseDto) -> Self {
        AuthSession {
            access_token: dto.access_token,
            user: UserMapper::to_domain(dto.user),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

impl From<Credentials> for LoginRequestDto {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl From<Registration> for RegisterRequestDto {
    fn from(registration: Registration) -> Self {
        Self {
            email: registration.email,
            password: registration.password,
            display_name: registration.display_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequestDto {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<ProfileUpdate> for UpdateProfileRequestDto {
    fn from(update: ProfileUpdate) -> Self {
        Self {
            display_name: update.display_name,
            avatar_url: update.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyEmailRequestDto {
    pub token: String,
}
