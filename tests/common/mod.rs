#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use assert_cmd::Command;
use chrono::NaiveDate;
use tempfile::TempDir;

use expense_report::delivery::{DeliveryDispatcher, OutboundMessage};
use expense_report::error::{ReportError, ReportResult};
use expense_report::export::{DocumentEncoder, XlsxEncoder};
use expense_report::models::{
    Category, CategoryId, Money, ReportPeriod, Transaction, TransactionKind, User, UserId, UserRef,
};
use expense_report::reports::{
    BudgetLookup, CategoryCatalog, ReportDocument, TransactionQuery, UserDirectory,
};

/// In-memory report source with switchable accessor failures
#[derive(Default)]
pub struct FakeSource {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: HashMap<CategoryId, Money>,

    pub fail_catalog: bool,
    pub fail_all_categories: bool,
    pub fail_ledger: bool,
    pub fail_count: bool,
    pub fail_budgets: bool,
    pub fail_type_totals: HashSet<TransactionKind>,
    pub fail_category_totals: HashSet<CategoryId>,

    pub ledger_limits_seen: RefCell<Vec<usize>>,
}

pub fn march() -> ReportPeriod {
    ReportPeriod::new(3, 2024)
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

pub fn ana() -> UserRef {
    UserRef::email("ana@example.com")
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default().with_user(1, "ana@example.com")
    }

    pub fn with_user(mut self, id: u64, email: &str) -> Self {
        self.users.push(User::new(UserId::new(id), email));
        self
    }

    pub fn with_category(mut self, id: u32, name: &str, kind: TransactionKind) -> Self {
        self.categories
            .push(Category::new(CategoryId::new(id), name, kind));
        self
    }

    pub fn with_disabled_category(mut self, id: u32, name: &str, kind: TransactionKind) -> Self {
        let mut category = Category::new(CategoryId::new(id), name, kind);
        category.enabled = false;
        self.categories.push(category);
        self
    }

    pub fn with_txn(mut self, date: NaiveDate, category: u32, cents: i64) -> Self {
        self.transactions.push(Transaction::new(
            UserId::new(1),
            date,
            CategoryId::new(category),
            Money::from_cents(cents),
        ));
        self
    }

    pub fn with_budget(mut self, category: u32, cents: i64) -> Self {
        self.budgets
            .insert(CategoryId::new(category), Money::from_cents(cents));
        self
    }

    fn offline(what: &str) -> ReportError {
        ReportError::Storage(format!("{} query timed out", what))
    }

    fn in_period(&self, user: UserId, period: ReportPeriod) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.user_id == user && period.contains(t.date))
    }

    fn kind_of(&self, id: CategoryId) -> Option<TransactionKind> {
        self.categories.iter().find(|c| c.id == id).map(|c| c.kind)
    }
}

impl UserDirectory for FakeSource {
    fn resolve_user(&self, user: &UserRef) -> ReportResult<User> {
        self.users
            .iter()
            .find(|u| match user {
                UserRef::Id(id) => u.id == *id,
                UserRef::Email(email) => u.has_email(email),
            })
            .cloned()
            .ok_or_else(|| ReportError::user_not_found(user.to_string()))
    }
}

impl CategoryCatalog for FakeSource {
    fn list_enabled_categories(&self) -> ReportResult<Vec<Category>> {
        if self.fail_catalog {
            return Err(Self::offline("catalog"));
        }
        Ok(self.categories.iter().filter(|c| c.enabled).cloned().collect())
    }

    fn list_all_categories(&self) -> ReportResult<Vec<Category>> {
        if self.fail_all_categories {
            return Err(Self::offline("category labels"));
        }
        Ok(self.categories.clone())
    }
}

impl TransactionQuery for FakeSource {
    fn list_transactions(
        &self,
        user: UserId,
        period: ReportPeriod,
        limit: usize,
    ) -> ReportResult<Vec<Transaction>> {
        self.ledger_limits_seen.borrow_mut().push(limit);
        if self.fail_ledger {
            return Err(Self::offline("ledger"));
        }
        let mut rows: Vec<Transaction> = self.in_period(user, period).cloned().collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows.truncate(limit);
        Ok(rows)
    }

    fn sum_by_type(
        &self,
        user: UserId,
        kind: TransactionKind,
        period: ReportPeriod,
    ) -> ReportResult<Money> {
        if self.fail_type_totals.contains(&kind) {
            return Err(Self::offline("type total"));
        }
        Ok(self
            .in_period(user, period)
            .filter(|t| self.kind_of(t.category_id) == Some(kind))
            .map(|t| t.amount)
            .sum())
    }

    fn sum_by_category(
        &self,
        user: UserId,
        category: CategoryId,
        period: ReportPeriod,
    ) -> ReportResult<Money> {
        if self.fail_category_totals.contains(&category) {
            return Err(Self::offline("category total"));
        }
        Ok(self
            .in_period(user, period)
            .filter(|t| t.category_id == category)
            .map(|t| t.amount)
            .sum())
    }

    fn count_transactions(&self, user: UserId, period: ReportPeriod) -> ReportResult<u64> {
        if self.fail_count {
            return Err(Self::offline("count"));
        }
        Ok(self.in_period(user, period).count() as u64)
    }
}

impl BudgetLookup for FakeSource {
    fn budget_for(
        &self,
        _user: UserId,
        category: CategoryId,
        _period: ReportPeriod,
    ) -> ReportResult<Option<Money>> {
        if self.fail_budgets {
            return Err(Self::offline("budget"));
        }
        Ok(self.budgets.get(&category).copied())
    }
}

/// Encoder that counts calls and delegates to the xlsx encoder
pub struct CountingEncoder {
    inner: XlsxEncoder,
    pub calls: Cell<usize>,
    pub fail: bool,
}

impl CountingEncoder {
    pub fn new() -> Self {
        Self {
            inner: XlsxEncoder::new("₹"),
            calls: Cell::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

impl DocumentEncoder for CountingEncoder {
    fn encode(&self, document: &ReportDocument) -> ReportResult<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(ReportError::Encoding("workbook too large".into()));
        }
        self.inner.encode(document)
    }

    fn extension(&self) -> &'static str {
        self.inner.extension()
    }

    fn content_type(&self) -> &'static str {
        self.inner.content_type()
    }
}

/// Dispatcher that records messages, optionally failing with a cause
#[derive(Default)]
pub struct RecordingDispatcher {
    pub sent: RefCell<Vec<OutboundMessage>>,
    pub fail_with: Option<(String, String)>,
}

impl RecordingDispatcher {
    pub fn failing(message: &str, cause: &str) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail_with: Some((message.to_string(), cause.to_string())),
        }
    }
}

impl DeliveryDispatcher for RecordingDispatcher {
    fn deliver(&self, message: &OutboundMessage) -> ReportResult<()> {
        if let Some((msg, cause)) = &self.fail_with {
            return Err(ReportError::delivery(msg.clone(), Some(cause.clone())));
        }
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

/// Isolated data directory for running the binary
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("expense-report").unwrap();
        cmd.env("EXPENSE_REPORT_DATA_DIR", self.dir.path())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Initialized storage with one user
    pub fn seeded() -> Self {
        let env = Self::new();
        env.cmd().arg("init").assert().success();
        env.cmd()
            .args(["user", "add", "ana@example.com"])
            .assert()
            .success();
        env
    }
}
