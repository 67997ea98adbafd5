//! Conversation controller
//!
//! The state machine at the centre of the bot: given an operator id and an
//! incoming text event, it reads the operator's session, validates input,
//! performs at most one repository side effect, writes the next session
//! state, and produces the outgoing replies.
//!
//! Dispatch is two-tier. An idle operator's text is matched against the menu
//! vocabulary; an operator with an active flow has their text treated as
//! form input for that flow's current step, never re-matched against the
//! menu, except for the universal cancel commands which clear the session
//! and return to the main menu.

use tracing::{debug, info};

use crate::database::EntityStore;
use crate::models::{NewCompany, NewSubscriber};
use crate::state::{
    AssignCompanyStep, CreateCompanyStep, CreateSubscriberStep, FlowState, SessionStore,
    UpdateCompanyStep, UpdateSubscriberStep,
};
use crate::utils::errors::{Result, SubDeskError};
use crate::utils::validation::is_valid_phone;
use super::commands::MenuCommand;
use super::texts;

/// Which reply keyboard the transport layer should attach to a reply. The
/// controller names screens; rendering them is the keyboard layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    SubscriberActions,
    CompanyActions,
}

/// One outgoing message. List operations produce one reply per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub screen: Option<Screen>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            screen: None,
        }
    }

    pub fn with_screen(text: impl Into<String>, screen: Screen) -> Self {
        Self {
            text: text.into(),
            screen: Some(screen),
        }
    }
}

pub struct ConversationController<S> {
    store: S,
    sessions: SessionStore,
}

impl<S: EntityStore> ConversationController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle the /start command: drop any in-progress flow and greet.
    pub fn start(&self, operator_id: i64) -> Vec<Reply> {
        self.sessions.clear(operator_id);
        vec![Reply::with_screen(texts::GREETING, Screen::Main)]
    }

    /// Advance the operator's conversation by one incoming text event.
    pub async fn handle_event(&self, operator_id: i64, text: &str) -> Result<Vec<Reply>> {
        let input = text.trim();

        if let Some(flow) = self.sessions.get(operator_id) {
            if MenuCommand::parse(input).is_some_and(|cmd| cmd.is_cancel()) {
                debug!(operator_id, "Flow cancelled");
                self.sessions.clear(operator_id);
                return Ok(vec![Reply::with_screen(texts::MAIN_MENU, Screen::Main)]);
            }
            return self.advance_flow(operator_id, flow, input).await;
        }

        match MenuCommand::parse(input) {
            Some(command) => self.handle_menu_command(operator_id, command).await,
            None => Ok(vec![Reply::text(texts::UNKNOWN_COMMAND)]),
        }
    }

    /// Start a flow or run a single-shot operation from the idle state.
    async fn handle_menu_command(
        &self,
        operator_id: i64,
        command: MenuCommand,
    ) -> Result<Vec<Reply>> {
        debug!(operator_id, command = ?command, "Menu command");

        let replies = match command {
            MenuCommand::ListSubscribers => {
                let operator = self.store.get_or_create_operator(operator_id).await?;
                let subscribers = self.store.list_subscribers(operator.id).await?;
                if subscribers.is_empty() {
                    vec![Reply::text(texts::NO_SUBSCRIBERS)]
                } else {
                    subscribers
                        .iter()
                        .map(|s| Reply::text(texts::subscriber_card(s)))
                        .collect()
                }
            }
            MenuCommand::ListCompanies => {
                let companies = self.store.list_companies().await?;
                if companies.is_empty() {
                    vec![Reply::text(texts::NO_COMPANIES)]
                } else {
                    companies
                        .iter()
                        .map(|c| Reply::text(texts::company_card(c)))
                        .collect()
                }
            }
            MenuCommand::SubscriberActions => vec![Reply::with_screen(
                texts::SUBSCRIBER_ACTIONS_MENU,
                Screen::SubscriberActions,
            )],
            MenuCommand::CompanyActions => vec![Reply::with_screen(
                texts::COMPANY_ACTIONS_MENU,
                Screen::CompanyActions,
            )],
            MenuCommand::AddSubscriber => self.begin_flow(
                operator_id,
                FlowState::CreateSubscriber(CreateSubscriberStep::AwaitingLastName),
                texts::ASK_LAST_NAME,
            ),
            MenuCommand::SearchSubscriber => self.begin_flow(
                operator_id,
                FlowState::SearchSubscriber,
                texts::ASK_SEARCH_PHONE,
            ),
            MenuCommand::EditSubscriber => self.begin_flow(
                operator_id,
                FlowState::UpdateSubscriberName(UpdateSubscriberStep::AwaitingPhone),
                texts::ASK_SEARCH_PHONE,
            ),
            MenuCommand::DeleteSubscriber => self.begin_flow(
                operator_id,
                FlowState::DeleteSubscriber,
                texts::ASK_DELETE_PHONE,
            ),
            MenuCommand::AssignToCompany => self.begin_flow(
                operator_id,
                FlowState::AssignToCompany(AssignCompanyStep::AwaitingPhone),
                texts::ASK_SEARCH_PHONE,
            ),
            MenuCommand::AddCompany => self.begin_flow(
                operator_id,
                FlowState::CreateCompany(CreateCompanyStep::AwaitingName),
                texts::ASK_COMPANY_NAME,
            ),
            MenuCommand::EditCompany => self.begin_flow(
                operator_id,
                FlowState::UpdateCompanyName(UpdateCompanyStep::AwaitingInn),
                texts::ASK_COMPANY_INN,
            ),
            MenuCommand::DeleteCompany => self.begin_flow(
                operator_id,
                FlowState::DeleteCompany,
                texts::ASK_DELETE_INN,
            ),
            MenuCommand::Back => vec![Reply::with_screen(texts::MAIN_MENU, Screen::Main)],
            MenuCommand::Restart => {
                return Ok(self.start(operator_id));
            }
        };

        Ok(replies)
    }

    fn begin_flow(&self, operator_id: i64, state: FlowState, prompt: &str) -> Vec<Reply> {
        self.sessions.set(operator_id, state);
        vec![Reply::text(prompt)]
    }

    /// Treat incoming text as form input for the active flow's current step.
    async fn advance_flow(
        &self,
        operator_id: i64,
        flow: FlowState,
        input: &str,
    ) -> Result<Vec<Reply>> {
        match flow {
            FlowState::CreateSubscriber(step) => {
                self.advance_create_subscriber(operator_id, step, input).await
            }
            FlowState::SearchSubscriber => self.finish_search_subscriber(operator_id, input).await,
            FlowState::UpdateSubscriberName(step) => {
                self.advance_update_subscriber(operator_id, step, input).await
            }
            FlowState::DeleteSubscriber => self.finish_delete_subscriber(operator_id, input).await,
            FlowState::AssignToCompany(step) => {
                self.advance_assign_company(operator_id, step, input).await
            }
            FlowState::CreateCompany(step) => {
                self.advance_create_company(operator_id, step, input).await
            }
            FlowState::UpdateCompanyName(step) => {
                self.advance_update_company(operator_id, step, input).await
            }
            FlowState::DeleteCompany => self.finish_delete_company(operator_id, input).await,
        }
    }

    async fn advance_create_subscriber(
        &self,
        operator_id: i64,
        step: CreateSubscriberStep,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let replies = match step {
            CreateSubscriberStep::AwaitingLastName => {
                self.sessions.set(
                    operator_id,
                    FlowState::CreateSubscriber(CreateSubscriberStep::AwaitingFirstName {
                        last_name: input.to_string(),
                    }),
                );
                vec![Reply::text(texts::ASK_FIRST_NAME)]
            }
            CreateSubscriberStep::AwaitingFirstName { last_name } => {
                self.sessions.set(
                    operator_id,
                    FlowState::CreateSubscriber(CreateSubscriberStep::AwaitingPhone {
                        last_name,
                        first_name: input.to_string(),
                    }),
                );
                vec![Reply::text(texts::ASK_PHONE)]
            }
            CreateSubscriberStep::AwaitingPhone {
                last_name,
                first_name,
            } => {
                if !is_valid_phone(input) {
                    // Re-prompt in place; the flow does not advance.
                    return Ok(vec![Reply::text(texts::INVALID_PHONE)]);
                }
                self.sessions.set(
                    operator_id,
                    FlowState::CreateSubscriber(CreateSubscriberStep::AwaitingAddress {
                        last_name,
                        first_name,
                        phone: input.to_string(),
                    }),
                );
                vec![Reply::text(texts::ASK_ADDRESS)]
            }
            CreateSubscriberStep::AwaitingAddress {
                last_name,
                first_name,
                phone,
            } => {
                let operator = self.store.get_or_create_operator(operator_id).await?;
                let result = self
                    .store
                    .insert_subscriber(NewSubscriber {
                        last_name,
                        first_name,
                        phone,
                        address: Some(input.to_string()),
                        operator_id: operator.id,
                    })
                    .await;

                self.sessions.clear(operator_id);
                match result {
                    Ok(subscriber) => {
                        info!(operator_id, subscriber_id = subscriber.id, "Subscriber created");
                        vec![Reply::text(texts::SUBSCRIBER_ADDED)]
                    }
                    Err(SubDeskError::UniqueViolation { .. }) => {
                        vec![Reply::text(texts::SUBSCRIBER_PHONE_TAKEN)]
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        Ok(replies)
    }

    async fn finish_search_subscriber(
        &self,
        operator_id: i64,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let found = self.store.find_subscriber_by_phone(input).await?;
        self.sessions.clear(operator_id);

        let reply = match found {
            Some(subscriber) => Reply::text(texts::subscriber_card(&subscriber)),
            None => Reply::text(texts::SUBSCRIBER_NOT_FOUND),
        };
        Ok(vec![reply])
    }

    async fn advance_update_subscriber(
        &self,
        operator_id: i64,
        step: UpdateSubscriberStep,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let replies = match step {
            UpdateSubscriberStep::AwaitingPhone => {
                match self.store.find_subscriber_by_phone(input).await? {
                    Some(subscriber) => {
                        self.sessions.set(
                            operator_id,
                            FlowState::UpdateSubscriberName(UpdateSubscriberStep::AwaitingFirstName {
                                subscriber_id: subscriber.id,
                            }),
                        );
                        vec![Reply::text(texts::ASK_NEW_FIRST_NAME)]
                    }
                    None => {
                        self.sessions.clear(operator_id);
                        vec![Reply::text(texts::SUBSCRIBER_NOT_FOUND)]
                    }
                }
            }
            UpdateSubscriberStep::AwaitingFirstName { subscriber_id } => {
                let affected = self
                    .store
                    .update_subscriber_first_name(subscriber_id, input)
                    .await?;
                self.sessions.clear(operator_id);

                // The target may have been deleted between lookup and commit.
                if affected == 0 {
                    vec![Reply::text(texts::SUBSCRIBER_NOT_FOUND)]
                } else {
                    info!(operator_id, subscriber_id, "Subscriber first name updated");
                    vec![Reply::text(texts::SUBSCRIBER_NAME_UPDATED)]
                }
            }
        };

        Ok(replies)
    }

    async fn finish_delete_subscriber(
        &self,
        operator_id: i64,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let affected = self.store.delete_subscriber_by_phone(input).await?;
        self.sessions.clear(operator_id);

        let reply = if affected == 0 {
            Reply::text(texts::DELETE_PHONE_NOT_FOUND)
        } else {
            info!(operator_id, affected, "Subscriber deleted");
            Reply::text(texts::SUBSCRIBER_DELETED)
        };
        Ok(vec![reply])
    }

    async fn advance_assign_company(
        &self,
        operator_id: i64,
        step: AssignCompanyStep,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let replies = match step {
            AssignCompanyStep::AwaitingPhone => {
                match self.store.find_subscriber_by_phone(input).await? {
                    Some(subscriber) => {
                        self.sessions.set(
                            operator_id,
                            FlowState::AssignToCompany(AssignCompanyStep::AwaitingInn {
                                subscriber_id: subscriber.id,
                            }),
                        );
                        vec![Reply::text(texts::ASK_ASSIGN_INN)]
                    }
                    // Stay on this step awaiting a corrected phone.
                    None => vec![Reply::text(texts::SUBSCRIBER_NOT_FOUND)],
                }
            }
            AssignCompanyStep::AwaitingInn { subscriber_id } => {
                match self.store.find_company_by_inn(input).await? {
                    Some(company) => {
                        let affected = self
                            .store
                            .update_subscriber_company(subscriber_id, company.id)
                            .await?;
                        self.sessions.clear(operator_id);

                        if affected == 0 {
                            vec![Reply::text(texts::SUBSCRIBER_NOT_FOUND)]
                        } else {
                            info!(
                                operator_id,
                                subscriber_id,
                                company_id = company.id,
                                "Subscriber linked to company"
                            );
                            vec![Reply::text(texts::SUBSCRIBER_ASSIGNED)]
                        }
                    }
                    // Stay on this step awaiting a corrected INN.
                    None => vec![Reply::text(texts::COMPANY_NOT_FOUND_RETRY)],
                }
            }
        };

        Ok(replies)
    }

    async fn advance_create_company(
        &self,
        operator_id: i64,
        step: CreateCompanyStep,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let replies = match step {
            CreateCompanyStep::AwaitingName => {
                self.sessions.set(
                    operator_id,
                    FlowState::CreateCompany(CreateCompanyStep::AwaitingCompanyType {
                        name: input.to_string(),
                    }),
                );
                vec![Reply::text(texts::ASK_COMPANY_TYPE)]
            }
            CreateCompanyStep::AwaitingCompanyType { name } => {
                self.sessions.set(
                    operator_id,
                    FlowState::CreateCompany(CreateCompanyStep::AwaitingInn {
                        name,
                        company_type: input.to_string(),
                    }),
                );
                vec![Reply::text(texts::ASK_COMPANY_INN)]
            }
            CreateCompanyStep::AwaitingInn { name, company_type } => {
                let result = self
                    .store
                    .insert_company(NewCompany {
                        name,
                        company_type,
                        inn: input.to_string(),
                    })
                    .await;

                self.sessions.clear(operator_id);
                match result {
                    Ok(company) => {
                        info!(operator_id, company_id = company.id, "Company created");
                        vec![Reply::text(texts::COMPANY_ADDED)]
                    }
                    Err(SubDeskError::UniqueViolation { .. }) => {
                        vec![Reply::text(texts::COMPANY_INN_TAKEN)]
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        Ok(replies)
    }

    async fn advance_update_company(
        &self,
        operator_id: i64,
        step: UpdateCompanyStep,
        input: &str,
    ) -> Result<Vec<Reply>> {
        let replies = match step {
            UpdateCompanyStep::AwaitingInn => {
                match self.store.find_company_by_inn(input).await? {
                    Some(company) => {
                        self.sessions.set(
                            operator_id,
                            FlowState::UpdateCompanyName(UpdateCompanyStep::AwaitingName {
                                company_id: company.id,
                            }),
                        );
                        vec![Reply::text(texts::ASK_NEW_COMPANY_NAME)]
                    }
                    None => {
                        self.sessions.clear(operator_id);
                        vec![Reply::text(texts::COMPANY_NOT_FOUND)]
                    }
                }
            }
            UpdateCompanyStep::AwaitingName { company_id } => {
                let affected = self.store.update_company_name(company_id, input).await?;
                self.sessions.clear(operator_id);

                if affected == 0 {
                    vec![Reply::text(texts::COMPANY_NOT_FOUND)]
                } else {
                    info!(operator_id, company_id, "Company name updated");
                    vec![Reply::text(texts::COMPANY_NAME_UPDATED)]
                }
            }
        };

        Ok(replies)
    }

    async fn finish_delete_company(&self, operator_id: i64, input: &str) -> Result<Vec<Reply>> {
        let affected = self.store.delete_company_by_inn(input).await?;
        self.sessions.clear(operator_id);

        let reply = if affected == 0 {
            Reply::text(texts::DELETE_INN_NOT_FOUND)
        } else {
            info!(operator_id, affected, "Company deleted");
            Reply::text(texts::COMPANY_DELETED)
        };
        Ok(vec![reply])
    }
}
