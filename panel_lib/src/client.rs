//! Resource-level facade over the transport client.

use panel_api::types::{
    AdminUser, Agency, Agent, Blog, Envelope, Identified, MediaItem, Portfolio, Property,
    RecordId, Role, Ticket,
};
use panel_api::{Client, Error, Filter};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::normalize::{entity_envelope, entity_error_envelope, fetch_details, fetch_page};
use crate::notify::{Notifier, TracingNotifier};
use crate::resources::{
    ResourceSpec, ADMINS, AGENCIES, AGENTS, BLOGS, MEDIA, PORTFOLIOS, PROPERTIES, ROLES, TICKETS,
};
use crate::selection::Selection;

/// Panel API client returning normalized envelopes.
///
/// Reads never fail at the type level: transport errors come back as
/// envelopes with `status = error`. Mutations additionally report their
/// outcome to the injected [`Notifier`].
pub struct PanelClient<N: Notifier = TracingNotifier> {
    inner: Client,
    notifier: N,
}

impl PanelClient<TracingNotifier> {
    /// Creates a client that reports mutation outcomes as log events.
    pub fn new(inner: Client) -> Self {
        Self::with_notifier(inner, TracingNotifier)
    }
}

impl<N: Notifier> PanelClient<N> {
    pub fn with_notifier(inner: Client, notifier: N) -> Self {
        Self { inner, notifier }
    }

    pub fn from_config(config: &PanelConfig, notifier: N) -> Result<Self, PanelError> {
        Ok(Self::with_notifier(config.build_client()?, notifier))
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetches one page of `spec`, normalized.
    pub async fn list<T: DeserializeOwned>(
        &self,
        spec: &ResourceSpec,
        filter: &Filter,
    ) -> Envelope<Vec<T>> {
        fetch_page(filter, &spec.rules, |query| async move {
            self.inner.get_raw(spec.path, &query).await
        })
        .await
    }

    /// Fetches one entry of `spec` by id, scanning the first list page when
    /// the detail endpoint fails.
    pub async fn details<T: DeserializeOwned + Identified>(
        &self,
        spec: &ResourceSpec,
        id: RecordId,
    ) -> Envelope<Option<T>> {
        let detail_path = spec.detail_path(id);
        let result = fetch_details(
            id,
            || self.inner.get_raw(&detail_path, ""),
            |query| async move { self.inner.get_raw(spec.path, &query).await },
        )
        .await;
        match result {
            Ok(envelope) => envelope,
            Err(err) => entity_error_envelope(&err),
        }
    }

    pub async fn get_media_list(&self, filter: &Filter) -> Envelope<Vec<MediaItem>> {
        self.list(&MEDIA, filter).await
    }

    pub async fn get_media_details(&self, id: RecordId) -> Envelope<Option<MediaItem>> {
        self.details(&MEDIA, id).await
    }

    pub async fn fetch_users_list(&self, filter: &Filter) -> Envelope<Vec<AdminUser>> {
        self.list(&ADMINS, filter).await
    }

    pub async fn get_roles(&self, filter: &Filter) -> Envelope<Vec<Role>> {
        self.list(&ROLES, filter).await
    }

    /// Admin page plus the full role list, fetched concurrently.
    pub async fn fetch_users_with_roles(
        &self,
        filter: &Filter,
    ) -> (Envelope<Vec<AdminUser>>, Envelope<Vec<Role>>) {
        let roles_filter = Filter::new().with_size(50);
        tokio::join!(self.fetch_users_list(filter), self.get_roles(&roles_filter))
    }

    pub async fn get_agencies(&self, filter: &Filter) -> Envelope<Vec<Agency>> {
        self.list(&AGENCIES, filter).await
    }

    pub async fn get_agents(&self, filter: &Filter) -> Envelope<Vec<Agent>> {
        self.list(&AGENTS, filter).await
    }

    pub async fn get_properties(&self, filter: &Filter) -> Envelope<Vec<Property>> {
        self.list(&PROPERTIES, filter).await
    }

    pub async fn get_blogs(&self, filter: &Filter) -> Envelope<Vec<Blog>> {
        self.list(&BLOGS, filter).await
    }

    pub async fn get_portfolios(&self, filter: &Filter) -> Envelope<Vec<Portfolio>> {
        self.list(&PORTFOLIOS, filter).await
    }

    pub async fn get_tickets(&self, filter: &Filter) -> Envelope<Vec<Ticket>> {
        self.list(&TICKETS, filter).await
    }

    /// POSTs a new entry to the collection.
    pub async fn create<T, B>(&self, spec: &ResourceSpec, body: &B) -> Envelope<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let result = self.inner.post(spec.path, body).await;
        self.finish_mutation(result, &format!("{} created", spec.label))
    }

    /// PATCHes the given fields of an entry.
    pub async fn update<T, B>(
        &self,
        spec: &ResourceSpec,
        id: RecordId,
        body: &B,
    ) -> Envelope<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let result = self.inner.patch(&spec.detail_path(id), body).await;
        self.finish_mutation(result, &format!("{} updated", spec.label))
    }

    /// PUTs a full replacement of an entry.
    pub async fn replace<T, B>(
        &self,
        spec: &ResourceSpec,
        id: RecordId,
        body: &B,
    ) -> Envelope<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let result = self.inner.put(&spec.detail_path(id), body).await;
        self.finish_mutation(result, &format!("{} updated", spec.label))
    }

    pub async fn delete(&self, spec: &ResourceSpec, id: RecordId) -> Envelope<Option<Value>> {
        let result = self.inner.delete(&spec.detail_path(id)).await;
        self.finish_mutation(result, &format!("{} deleted", spec.label))
    }

    /// Deletes one or several entries, one request each, in order.
    pub async fn delete_many(
        &self,
        spec: &ResourceSpec,
        ids: impl Into<Selection<RecordId>>,
    ) -> Vec<Envelope<Option<Value>>> {
        let mut results = Vec::new();
        for id in ids.into().into_vec() {
            results.push(self.delete(spec, id).await);
        }
        results
    }

    fn finish_mutation<T: DeserializeOwned>(
        &self,
        result: Result<Value, Error>,
        success_message: &str,
    ) -> Envelope<Option<T>> {
        match result.and_then(|raw| entity_envelope::<T>(raw, success_message)) {
            Ok(envelope) => {
                self.notifier.success(&envelope.meta_data.message);
                envelope
            }
            Err(err) => {
                let envelope = entity_error_envelope(&err);
                self.notifier.error(&envelope.meta_data.message);
                envelope
            }
        }
    }
}
