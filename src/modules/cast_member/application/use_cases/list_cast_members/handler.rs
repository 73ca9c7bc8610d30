use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::domain::CastMemberGateway;
use crate::shared::application::pagination::{Pagination, SearchQuery};
use crate::shared::application::use_case::Query;
use crate::shared::errors::DomainResult;

use super::result::CastMemberListOutput;

/// Query handler for listing cast members
pub struct ListCastMembersHandler {
    cast_member_gateway: Arc<dyn CastMemberGateway>,
}

impl ListCastMembersHandler {
    pub fn new(cast_member_gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self {
            cast_member_gateway,
        }
    }
}

#[async_trait]
impl Query<SearchQuery, Pagination<CastMemberListOutput>> for ListCastMembersHandler {
    async fn execute(&self, query: SearchQuery) -> DomainResult<Pagination<CastMemberListOutput>> {
        Ok(self
            .cast_member_gateway
            .find_all(&query)
            .await?
            .map(|member| CastMemberListOutput::from(&member)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::gateway::MockCastMemberGateway;
    use crate::modules::cast_member::domain::{CastMember, CastMemberKind};

    #[tokio::test]
    async fn test_list_cast_members_maps_items_and_keeps_metadata() {
        let member = CastMember::new("Mel Brooks", CastMemberKind::Actor).unwrap();

        let mut gateway = MockCastMemberGateway::new();
        gateway
            .expect_find_all()
            .returning(move |_| Ok(Pagination::new(0, 10, 1, vec![member.clone()])));

        let handler = ListCastMembersHandler::new(Arc::new(gateway));
        let page = handler.execute(SearchQuery::default()).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Mel Brooks");
        assert_eq!(page.items[0].kind, CastMemberKind::Actor);
    }
}
