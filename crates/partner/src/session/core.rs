//! Core data operations: CRUD, query, search, lead conversion.
//!
//! Every method is a thin delegation to [`Session::invoke`] with the
//! operation's literal name and parameter shape; fault detection and result
//! wrapping happen there.

use chrono::{DateTime, Utc};
use forcewrap_soap::{CallParams, SoapBinding};
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::Result;

use super::Session;

impl<B: SoapBinding> Session<B> {
    /// Execute a SOQL query against current data.
    #[instrument(skip(self))]
    pub async fn query(&mut self, query_string: &str) -> Result<Option<Value>> {
        self.invoke("query", CallParams::named([("queryString", query_string)]))
            .await
    }

    /// Execute a SOQL query that also returns deleted and archived records.
    #[instrument(skip(self))]
    pub async fn query_all(&mut self, query_string: &str) -> Result<Option<Value>> {
        self.invoke("queryAll", CallParams::named([("queryString", query_string)]))
            .await
    }

    /// Fetch the next batch for a query using its query locator.
    #[instrument(skip(self))]
    pub async fn query_more(&mut self, query_locator: &str) -> Result<Option<Value>> {
        self.invoke(
            "queryMore",
            CallParams::named([("queryLocator", query_locator)]),
        )
        .await
    }

    /// Execute a SOSL text search.
    #[instrument(skip(self))]
    pub async fn search(&mut self, search_string: &str) -> Result<Option<Value>> {
        self.invoke("search", CallParams::named([("searchString", search_string)]))
            .await
    }

    /// Retrieve records of one sObject type by id, returning the listed
    /// fields.
    #[instrument(skip(self, ids))]
    pub async fn retrieve(
        &mut self,
        field_list: &str,
        sobject_type: &str,
        ids: &[&str],
    ) -> Result<Option<Value>> {
        self.invoke(
            "retrieve",
            CallParams::named([
                ("fieldList", json!(field_list)),
                ("sObjectType", json!(sobject_type)),
                ("ids", json!(ids)),
            ]),
        )
        .await
    }

    /// Create sObjects.
    #[instrument(skip_all)]
    pub async fn create(&mut self, sobjects: Vec<Value>) -> Result<Option<Value>> {
        self.invoke("create", CallParams::named([("sObjects", sobjects)]))
            .await
    }

    /// Update existing sObjects.
    #[instrument(skip_all)]
    pub async fn update(&mut self, sobjects: Vec<Value>) -> Result<Option<Value>> {
        self.invoke("update", CallParams::named([("sObjects", sobjects)]))
            .await
    }

    /// Create or update sObjects, matching on an external id field.
    #[instrument(skip(self, sobjects))]
    pub async fn upsert(
        &mut self,
        external_id_field: &str,
        sobjects: Vec<Value>,
    ) -> Result<Option<Value>> {
        self.invoke(
            "upsert",
            CallParams::named([
                ("externalIDFieldName", json!(external_id_field)),
                ("sObjects", Value::Array(sobjects)),
            ]),
        )
        .await
    }

    /// Delete records by id.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, ids: &[&str]) -> Result<Option<Value>> {
        self.invoke("delete", CallParams::named([("ids", json!(ids))]))
            .await
    }

    /// Restore records from the recycle bin by id.
    #[instrument(skip(self))]
    pub async fn undelete(&mut self, ids: &[&str]) -> Result<Option<Value>> {
        self.invoke("undelete", CallParams::named([("ids", json!(ids))]))
            .await
    }

    /// Permanently delete records from the recycle bin.
    #[instrument(skip(self))]
    pub async fn empty_recycle_bin(&mut self, ids: &[&str]) -> Result<Option<Value>> {
        self.invoke("emptyRecycleBin", CallParams::named([("ids", json!(ids))]))
            .await
    }

    /// Merge records of one sObject type.
    #[instrument(skip_all)]
    pub async fn merge(&mut self, merge_requests: Vec<Value>) -> Result<Option<Value>> {
        self.invoke("merge", CallParams::named([("request", merge_requests)]))
            .await
    }

    /// Submit records for approval or process existing approval work items.
    #[instrument(skip_all)]
    pub async fn process(&mut self, actions: Vec<Value>) -> Result<Option<Value>> {
        self.invoke("process", CallParams::named([("actions", actions)]))
            .await
    }

    /// Convert leads into accounts, contacts, and opportunities.
    #[instrument(skip_all)]
    pub async fn convert_lead(&mut self, lead_converts: Vec<Value>) -> Result<Option<Value>> {
        self.invoke(
            "convertLead",
            CallParams::named([("leadConverts", lead_converts)]),
        )
        .await
    }

    /// List records of one sObject type deleted inside a time window.
    #[instrument(skip(self))]
    pub async fn get_deleted(
        &mut self,
        sobject_type: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Option<Value>> {
        self.invoke(
            "getDeleted",
            CallParams::named([
                ("sObjectType", json!(sobject_type)),
                ("startDate", json!(start_date.to_rfc3339())),
                ("endDate", json!(end_date.to_rfc3339())),
            ]),
        )
        .await
    }

    /// List records of one sObject type updated inside a time window.
    #[instrument(skip(self))]
    pub async fn get_updated(
        &mut self,
        sobject_type: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Option<Value>> {
        self.invoke(
            "getUpdated",
            CallParams::named([
                ("sObjectType", json!(sobject_type)),
                ("startDate", json!(start_date.to_rfc3339())),
                ("endDate", json!(end_date.to_rfc3339())),
            ]),
        )
        .await
    }

    /// Invalidate other sessions by session id.
    #[instrument(skip_all)]
    pub async fn invalidate_sessions(&mut self, session_ids: &[&str]) -> Result<Option<Value>> {
        self.invoke(
            "invalidateSessions",
            CallParams::named([("sessionIds", json!(session_ids))]),
        )
        .await
    }

    /// End this session on the server.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<Option<Value>> {
        self.invoke("logout", CallParams::None).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::session::tests::{session_with_replies, MockBinding};

    fn named_params(session: &Session<MockBinding>, index: usize) -> &serde_json::Map<String, Value> {
        match &session.binding().calls[index] {
            (_, CallParams::Named(fields)) => fields,
            (operation, other) => panic!("{operation} sent unexpected params: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_sends_query_string() {
        let mut session = session_with_replies(true, []);
        session.query("SELECT Id FROM Account").await.unwrap();

        assert_eq!(session.binding().calls[0].0, "query");
        assert_eq!(
            named_params(&session, 0)["queryString"],
            json!("SELECT Id FROM Account")
        );
    }

    #[tokio::test]
    async fn test_retrieve_sends_field_list_type_and_ids() {
        let mut session = session_with_replies(true, []);
        session
            .retrieve("Id, Name", "Account", &["001x0", "001x1"])
            .await
            .unwrap();

        let fields = named_params(&session, 0);
        assert_eq!(fields["fieldList"], json!("Id, Name"));
        assert_eq!(fields["sObjectType"], json!("Account"));
        assert_eq!(fields["ids"], json!(["001x0", "001x1"]));
    }

    #[tokio::test]
    async fn test_upsert_sends_external_id_field() {
        let mut session = session_with_replies(true, []);
        session
            .upsert("MyExtId__c", vec![json!({"type": "Account", "Name": "Acme"})])
            .await
            .unwrap();

        assert_eq!(session.binding().calls[0].0, "upsert");
        let fields = named_params(&session, 0);
        assert_eq!(fields["externalIDFieldName"], json!("MyExtId__c"));
        assert_eq!(fields["sObjects"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_deleted_renders_rfc3339_window() {
        let mut session = session_with_replies(true, []);
        let start = Utc.with_ymd_and_hms(2011, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2011, 3, 2, 0, 0, 0).unwrap();
        session.get_deleted("Account", start, end).await.unwrap();

        let fields = named_params(&session, 0);
        assert_eq!(fields["sObjectType"], json!("Account"));
        assert_eq!(fields["startDate"], json!("2011-03-01T00:00:00+00:00"));
        assert_eq!(fields["endDate"], json!("2011-03-02T00:00:00+00:00"));
    }

    #[tokio::test]
    async fn test_logout_sends_no_params() {
        let mut session = session_with_replies(true, []);
        session.logout().await.unwrap();

        assert_eq!(
            session.binding().calls[0],
            ("logout".to_string(), CallParams::None)
        );
    }
}
