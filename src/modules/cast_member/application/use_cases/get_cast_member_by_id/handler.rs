use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMember, CastMemberGateway, CastMemberId};
use crate::shared::application::use_case::Query;
use crate::shared::errors::{DomainError, DomainResult};

use super::{query::GetCastMemberByIdQuery, result::CastMemberOutput};

/// Query handler for fetching one cast member by id
pub struct GetCastMemberByIdHandler {
    cast_member_gateway: Arc<dyn CastMemberGateway>,
}

impl GetCastMemberByIdHandler {
    pub fn new(cast_member_gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self {
            cast_member_gateway,
        }
    }
}

#[async_trait]
impl Query<GetCastMemberByIdQuery, CastMemberOutput> for GetCastMemberByIdHandler {
    async fn execute(&self, query: GetCastMemberByIdQuery) -> DomainResult<CastMemberOutput> {
        let id = CastMemberId::from(query.id.as_str());
        self.cast_member_gateway
            .find_by_id(&id)
            .await?
            .map(|member| CastMemberOutput::from(&member))
            .ok_or_else(|| DomainError::not_found(CastMember::AGGREGATE_NAME, query.id))
    }
}
