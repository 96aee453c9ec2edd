// tests/support/mocks.rs
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use finboard_core::application::{
    ApplicationError, ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    ports::{
        notify::{Notice, Notifier},
        security::{PasswordHasher, TokenManager},
        time::Clock,
        views::{RouteScope, ViewInvalidator},
    },
};
use finboard_core::domain::{
    audit::{AuditLog, AuditLogCursor, AuditLogRepository, NewAuditLog},
    contract::{Contract, ContractId, ContractRepository, ContractValues, NewContract},
    employee::{Employee, EmployeeId, EmployeeRepository, EmployeeValues, NewEmployee},
    errors::{DomainError, DomainResult},
    transaction::{
        NewTransaction, Transaction, TransactionFilter, TransactionId, TransactionRepository,
        TransactionValues,
    },
    user::{Email, NewUser, ProfileUpdate, User, UserId, UserRepository},
};
use once_cell::sync::Lazy;
use uuid::Uuid;

/// The instant every test clock reports.
pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap()
}

/// Switches shared by the in-memory repositories.
#[derive(Default)]
pub struct Faults {
    /// Every write returns a persistence error.
    pub fail_writes: AtomicBool,
    /// The row disappears after it was fetched, before the write lands.
    pub vanish_before_write: AtomicBool,
}

impl Faults {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn vanish_before_write(&self) {
        self.vanish_before_write.store(true, Ordering::SeqCst);
    }

    fn check_write(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Persistence("store unavailable".into()))
        } else {
            Ok(())
        }
    }

    fn vanishing(&self) -> bool {
        self.vanish_before_write.load(Ordering::SeqCst)
    }
}

// ---- transactions ----

#[derive(Default)]
pub struct InMemoryTransactionRepo {
    pub rows: Mutex<Vec<Transaction>>,
    pub faults: Faults,
    pub batch_calls: AtomicUsize,
}

impl InMemoryTransactionRepo {
    pub fn all(&self) -> Vec<Transaction> {
        lock(&self.rows).clone()
    }

    pub fn seed(&self, owner: UserId, values: TransactionValues) -> Transaction {
        let tx = Transaction {
            id: TransactionId::generate(),
            user_id: owner,
            values,
            created_at: *FIXED_NOW,
        };
        lock(&self.rows).push(tx.clone());
        tx
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepo {
    async fn insert(&self, new: NewTransaction) -> DomainResult<Transaction> {
        self.faults.check_write()?;
        let tx = Transaction {
            id: TransactionId::generate(),
            user_id: new.user_id,
            values: new.values,
            created_at: *FIXED_NOW,
        };
        lock(&self.rows).push(tx.clone());
        Ok(tx)
    }

    async fn insert_batch(&self, batch: Vec<NewTransaction>) -> DomainResult<Vec<Transaction>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.faults.check_write()?;
        let created: Vec<Transaction> = batch
            .into_iter()
            .map(|new| Transaction {
                id: TransactionId::generate(),
                user_id: new.user_id,
                values: new.values,
                created_at: *FIXED_NOW,
            })
            .collect();
        lock(&self.rows).extend(created.iter().cloned());
        Ok(created)
    }

    async fn find_owned(&self, id: TransactionId, owner: UserId) -> DomainResult<Option<Transaction>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|tx| tx.id == id && tx.user_id == owner)
            .cloned())
    }

    async fn update_owned(
        &self,
        id: TransactionId,
        owner: UserId,
        values: &TransactionValues,
    ) -> DomainResult<u64> {
        self.faults.check_write()?;
        let mut rows = lock(&self.rows);
        if self.faults.vanishing() {
            rows.retain(|tx| tx.id != id);
        }
        match rows.iter_mut().find(|tx| tx.id == id && tx.user_id == owner) {
            Some(tx) => {
                tx.replace(values.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_owned(&self, id: TransactionId, owner: UserId) -> DomainResult<u64> {
        self.faults.check_write()?;
        let mut rows = lock(&self.rows);
        if self.faults.vanishing() {
            rows.retain(|tx| tx.id != id);
        }
        let before = rows.len();
        rows.retain(|tx| !(tx.id == id && tx.user_id == owner));
        Ok((before - rows.len()) as u64)
    }

    async fn list_owned(
        &self,
        owner: UserId,
        filter: TransactionFilter,
    ) -> DomainResult<Vec<Transaction>> {
        let mut rows: Vec<Transaction> = lock(&self.rows)
            .iter()
            .filter(|tx| tx.user_id == owner && filter.matches(tx.values.date))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.values.date.cmp(&a.values.date));
        if let Some(limit) = filter.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

// ---- contracts ----

#[derive(Default)]
pub struct InMemoryContractRepo {
    pub rows: Mutex<Vec<Contract>>,
    pub faults: Faults,
}

impl InMemoryContractRepo {
    pub fn all(&self) -> Vec<Contract> {
        lock(&self.rows).clone()
    }
}

#[async_trait]
impl ContractRepository for InMemoryContractRepo {
    async fn insert(&self, new: NewContract) -> DomainResult<Contract> {
        self.faults.check_write()?;
        let contract = Contract {
            id: ContractId::generate(),
            user_id: new.user_id,
            values: new.values,
            created_at: *FIXED_NOW,
        };
        lock(&self.rows).push(contract.clone());
        Ok(contract)
    }

    async fn find_owned(&self, id: ContractId, owner: UserId) -> DomainResult<Option<Contract>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|c| c.id == id && c.user_id == owner)
            .cloned())
    }

    async fn update_owned(
        &self,
        id: ContractId,
        owner: UserId,
        values: &ContractValues,
    ) -> DomainResult<u64> {
        self.faults.check_write()?;
        let mut rows = lock(&self.rows);
        if self.faults.vanishing() {
            rows.retain(|c| c.id != id);
        }
        match rows.iter_mut().find(|c| c.id == id && c.user_id == owner) {
            Some(c) => {
                c.replace(values.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_owned(&self, id: ContractId, owner: UserId) -> DomainResult<u64> {
        self.faults.check_write()?;
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|c| !(c.id == id && c.user_id == owner));
        Ok((before - rows.len()) as u64)
    }

    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Contract>> {
        let mut rows: Vec<Contract> = lock(&self.rows)
            .iter()
            .filter(|c| c.user_id == owner)
            .cloned()
            .collect();
        rows.reverse();
        Ok(rows)
    }
}

// ---- employees ----

#[derive(Default)]
pub struct InMemoryEmployeeRepo {
    pub rows: Mutex<Vec<Employee>>,
    pub faults: Faults,
}

impl InMemoryEmployeeRepo {
    pub fn all(&self) -> Vec<Employee> {
        lock(&self.rows).clone()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepo {
    async fn insert(&self, new: NewEmployee) -> DomainResult<Employee> {
        self.faults.check_write()?;
        let employee = Employee {
            id: EmployeeId::generate(),
            user_id: new.user_id,
            values: new.values,
            created_at: *FIXED_NOW,
        };
        lock(&self.rows).push(employee.clone());
        Ok(employee)
    }

    async fn find_owned(&self, id: EmployeeId, owner: UserId) -> DomainResult<Option<Employee>> {
        Ok(lock(&self.rows)
            .iter()
            .find(|e| e.id == id && e.user_id == owner)
            .cloned())
    }

    async fn update_owned(
        &self,
        id: EmployeeId,
        owner: UserId,
        values: &EmployeeValues,
    ) -> DomainResult<u64> {
        self.faults.check_write()?;
        let mut rows = lock(&self.rows);
        if self.faults.vanishing() {
            rows.retain(|e| e.id != id);
        }
        match rows.iter_mut().find(|e| e.id == id && e.user_id == owner) {
            Some(e) => {
                e.replace(values.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_owned(&self, id: EmployeeId, owner: UserId) -> DomainResult<u64> {
        self.faults.check_write()?;
        let mut rows = lock(&self.rows);
        let before = rows.len();
        rows.retain(|e| !(e.id == id && e.user_id == owner));
        Ok((before - rows.len()) as u64)
    }

    async fn list_owned(&self, owner: UserId) -> DomainResult<Vec<Employee>> {
        let mut rows: Vec<Employee> = lock(&self.rows)
            .iter()
            .filter(|e| e.user_id == owner)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.values.hire_date.cmp(&a.values.hire_date));
        Ok(rows)
    }
}

// ---- audit ----

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditFailure {
    PolicyDenied,
    Unavailable,
}

#[derive(Default)]
pub struct InMemoryAuditRepo {
    pub rows: Mutex<Vec<AuditLog>>,
    pub failure: Mutex<Option<AuditFailure>>,
    pub attempts: AtomicUsize,
}

impl InMemoryAuditRepo {
    pub fn fail_with(&self, failure: AuditFailure) {
        *lock(&self.failure) = Some(failure);
    }

    pub fn entries(&self) -> Vec<AuditLog> {
        lock(&self.rows).clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn failure_error(&self) -> Option<DomainError> {
        lock(&self.failure).map(|failure| match failure {
            AuditFailure::PolicyDenied => DomainError::PermissionDenied(
                "new row violates row-level security policy for table \"audit_logs\"".into(),
            ),
            AuditFailure::Unavailable => DomainError::Persistence("connection reset".into()),
        })
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditRepo {
    async fn insert(&self, log: NewAuditLog) -> DomainResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failure_error() {
            return Err(err);
        }
        let mut rows = lock(&self.rows);
        // Strictly increasing timestamps keep the keyset order deterministic.
        let created_at = *FIXED_NOW + chrono::Duration::seconds(rows.len() as i64);
        rows.push(AuditLog {
            id: Uuid::new_v4(),
            user_id: log.user_id,
            table_name: log.table_name,
            record_id: log.record_id,
            action: log.action,
            old_values: log.old_values,
            new_values: log.new_values,
            changed_fields: log.changed_fields,
            created_at,
        });
        Ok(())
    }

    async fn list_for_actor(
        &self,
        actor: UserId,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<String>)> {
        if let Some(err) = self.failure_error() {
            return Err(err);
        }
        let mut rows: Vec<AuditLog> = lock(&self.rows)
            .iter()
            .filter(|log| log.user_id == actor)
            .filter(|log| match &cursor {
                Some(c) => (log.created_at, log.id) < (c.created_at, c.id),
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let has_more = rows.len() > limit as usize;
        rows.truncate(limit as usize);
        let next = if has_more {
            rows.last()
                .map(|last| AuditLogCursor::new(last.created_at, last.id).encode())
        } else {
            None
        };
        Ok((rows, next))
    }
}

// ---- users ----

#[derive(Default)]
pub struct InMemoryUserRepo {
    pub rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut rows = lock(&self.rows);
        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let user = User {
            id: UserId::generate(),
            email: new_user.email,
            full_name: new_user.full_name,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(lock(&self.rows).iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(lock(&self.rows).iter().find(|u| u.id == id).cloned())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User> {
        let mut rows = lock(&self.rows);
        let user = rows
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.rename(update.full_name, update.updated_at);
        Ok(user.clone())
    }
}

// ---- ports ----

/// Stores the password verbatim behind a prefix.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::Unauthenticated)
        }
    }
}

/// Tokens look like `user:<uuid>:<email>`.
pub struct DummyTokenManager;

pub fn token_for(user_id: UserId, email: &str) -> String {
    format!("user:{user_id}:{email}")
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Ok(AuthTokenDto {
            token: token_for(subject.user_id, &subject.email),
            issued_at: *FIXED_NOW,
            expires_at: *FIXED_NOW + chrono::Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let mut parts = token.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("user"), Some(id), Some(email)) => {
                let id: UserId = id.parse().map_err(|_| ApplicationError::Unauthenticated)?;
                Ok(AuthenticatedUser {
                    id,
                    email: email.to_string(),
                    issued_at: *FIXED_NOW,
                    expires_at: *FIXED_NOW + chrono::Duration::hours(1),
                    session_id: None,
                })
            }
            _ => Err(ApplicationError::Unauthenticated),
        }
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}

#[derive(Default)]
pub struct CapturingInvalidator {
    pub scopes: Mutex<Vec<RouteScope>>,
}

impl CapturingInvalidator {
    pub fn scopes(&self) -> Vec<RouteScope> {
        lock(&self.scopes).clone()
    }
}

impl ViewInvalidator for CapturingInvalidator {
    fn invalidate(&self, scope: RouteScope) {
        lock(&self.scopes).push(scope);
    }
}

#[derive(Default)]
pub struct CapturingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl CapturingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }
}

impl Notifier for CapturingNotifier {
    fn notify(&self, notice: Notice) {
        lock(&self.notices).push(notice);
    }
}
