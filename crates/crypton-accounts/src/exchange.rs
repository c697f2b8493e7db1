//! Coins, wallets and the buy/sell/swap exchange
//!
//! Prices and amounts are [`Decimal`]s. Every operation takes the store's
//! write lock once, so a trade either applies completely or not at all.

use crate::error::{AccountError, AccountResult};
use crate::store::{AccountStore, State};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Smallest amount that can be sold (`0.0001`).
pub const MIN_SELL_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// Market data of a listed coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
	pub symbol: String,
	pub name: String,
	#[serde(default)]
	pub image: String,
	pub current_price: Decimal,
	#[serde(default)]
	pub market_cap: Decimal,
	#[serde(default)]
	pub total_volume: Decimal,
	pub market_cap_rank: u32,
	#[serde(default)]
	pub ath: Decimal,
	#[serde(default)]
	pub atl: Decimal,
	#[serde(default = "active")]
	pub is_active: bool,
}

fn active() -> bool {
	true
}

impl Coin {
	pub fn new(
		symbol: impl Into<String>,
		name: impl Into<String>,
		current_price: Decimal,
		market_cap_rank: u32,
	) -> Self {
		Self {
			symbol: symbol.into(),
			name: name.into(),
			image: String::new(),
			current_price,
			market_cap: Decimal::ZERO,
			total_volume: Decimal::ZERO,
			market_cap_rank,
			ath: current_price,
			atl: current_price,
			is_active: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wallet {
	pub username: String,
	pub balance: Decimal,
}

/// Amount of one coin held by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
	pub username: String,
	pub symbol: String,
	pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
	Buy,
	Sell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
	pub id: u64,
	pub username: String,
	pub kind: TransactionKind,
	pub symbol: String,
	pub coin_name: String,
	pub amount: Decimal,
	pub total_value: Decimal,
	pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellReceipt {
	pub wallet_balance: Decimal,
	pub asset_balance: Decimal,
	pub coin: String,
	pub sold_amount: Decimal,
	pub total_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapReceipt {
	pub swapped: Decimal,
	pub from_symbol: String,
	pub received: Decimal,
	pub to_symbol: String,
}

/// Map an overflowed `checked_*` result to `AmountTooLarge`.
fn checked(value: Option<Decimal>) -> AccountResult<Decimal> {
	value.ok_or(AccountError::AmountTooLarge)
}

impl State {
	fn coin(&self, symbol: &str) -> Option<&Coin> {
		self.coins.iter().find(|coin| coin.symbol == symbol)
	}

	fn asset_index(&self, username: &str, symbol: &str) -> Option<usize> {
		self.assets
			.iter()
			.position(|asset| asset.username == username && asset.symbol == symbol)
	}

	fn credit_asset(&mut self, username: &str, symbol: &str, amount: Decimal) -> AccountResult<()> {
		match self.asset_index(username, symbol) {
			Some(index) => {
				let asset = &mut self.assets[index];
				asset.amount = checked(asset.amount.checked_add(amount))?;
			}
			None => self.assets.push(Asset {
				username: username.to_string(),
				symbol: symbol.to_string(),
				amount,
			}),
		}
		Ok(())
	}

	/// Subtract `amount` from the holding at `index`, dropping it once empty.
	/// Returns what is left.
	fn debit_asset(&mut self, index: usize, amount: Decimal) -> Decimal {
		let asset = &mut self.assets[index];
		asset.amount -= amount;
		let remaining = asset.amount;
		if remaining <= Decimal::ZERO {
			self.assets.remove(index);
		}
		remaining
	}

	fn record(
		&mut self,
		username: &str,
		kind: TransactionKind,
		coin: &Coin,
		amount: Decimal,
		total_value: Decimal,
	) -> Transaction {
		let id = self.next_id();
		let transaction = Transaction {
			id,
			username: username.to_string(),
			kind,
			symbol: coin.symbol.clone(),
			coin_name: coin.name.clone(),
			amount,
			total_value,
			timestamp: Utc::now(),
		};
		self.transactions.push(transaction.clone());
		transaction
	}
}

impl AccountStore {
	/// List or update a coin. Staff only.
	pub fn upsert_coin(&self, actor: &str, coin: Coin) -> AccountResult<()> {
		let mut state = self.state.write();
		Self::require_staff(&state, actor)?;
		tracing::debug!(symbol = %coin.symbol, price = %coin.current_price, "Coin updated");
		match state.coins.iter_mut().find(|c| c.symbol == coin.symbol) {
			Some(existing) => *existing = coin,
			None => state.coins.push(coin),
		}
		Ok(())
	}

	/// Listed coins by market cap rank.
	pub fn coins(&self) -> Vec<Coin> {
		let mut coins = self.state.read().coins.clone();
		coins.sort_by_key(|coin| coin.market_cap_rank);
		coins
	}

	pub fn coin(&self, symbol: &str) -> AccountResult<Coin> {
		self.state
			.read()
			.coin(symbol)
			.cloned()
			.ok_or(AccountError::CoinNotFound)
	}

	pub fn wallet(&self, username: &str) -> AccountResult<Wallet> {
		self.state
			.read()
			.wallets
			.iter()
			.find(|wallet| wallet.username == username)
			.cloned()
			.ok_or(AccountError::UserNotFound)
	}

	/// Every wallet for staff, only their own otherwise.
	pub fn wallets(&self, viewer: &str) -> AccountResult<Vec<Wallet>> {
		let state = self.state.read();
		if state.user(viewer)?.is_staff {
			Ok(state.wallets.clone())
		} else {
			Ok(state
				.wallets
				.iter()
				.filter(|wallet| wallet.username == viewer)
				.cloned()
				.collect())
		}
	}

	/// Set `target`'s wallet balance. Staff only.
	pub fn set_balance(
		&self,
		actor: &str,
		target: &str,
		balance: Decimal,
	) -> AccountResult<Wallet> {
		let mut state = self.state.write();
		Self::require_staff(&state, actor)?;
		let wallet = state.wallet_mut(target)?;
		wallet.balance = balance;
		let wallet = wallet.clone();
		drop(state);

		tracing::info!(actor, target, %balance, "Wallet balance set");
		Ok(wallet)
	}

	/// Buy `amount` of `symbol` at its current price
	///
	/// # Examples
	///
	/// ```
	/// use crypton_accounts::{AccountStore, Coin, Registration};
	/// use rust_decimal::Decimal;
	///
	/// let store = AccountStore::new();
	/// store.create_superuser("admin", "admin-pass").unwrap();
	/// store.register(Registration::new("sara", "sara-pass")).unwrap();
	/// store.upsert_coin("admin", Coin::new("btc", "Bitcoin", Decimal::from(100), 1)).unwrap();
	/// store.set_balance("admin", "sara", Decimal::from(250)).unwrap();
	///
	/// store.buy("sara", "btc", Decimal::from(2)).unwrap();
	///
	/// assert_eq!(store.wallet("sara").unwrap().balance, Decimal::from(50));
	/// assert_eq!(store.assets("sara", None).unwrap()[0].amount, Decimal::from(2));
	/// ```
	pub fn buy(
		&self,
		username: &str,
		symbol: &str,
		amount: Decimal,
	) -> AccountResult<Transaction> {
		if amount <= Decimal::ZERO {
			return Err(AccountError::AmountTooSmall(Decimal::ZERO));
		}

		let mut state = self.state.write();
		let coin = state.coin(symbol).cloned().ok_or(AccountError::CoinNotFound)?;
		let total_value = checked(coin.current_price.checked_mul(amount))?;
		if state.wallet_mut(username)?.balance < total_value {
			return Err(AccountError::InsufficientBalance);
		}
		state.credit_asset(username, &coin.symbol, amount)?;
		state.wallet_mut(username)?.balance -= total_value;
		let transaction = state.record(username, TransactionKind::Buy, &coin, amount, total_value);
		drop(state);

		tracing::info!(username, symbol, %amount, %total_value, "Coin bought");
		Ok(transaction)
	}

	/// Sell `amount` of a held coin back into the wallet
	///
	/// The symbol is matched case-insensitively. A holding that drops to
	/// zero is removed.
	pub fn sell(
		&self,
		username: &str,
		symbol: &str,
		amount: Decimal,
	) -> AccountResult<SellReceipt> {
		if amount < MIN_SELL_AMOUNT {
			return Err(AccountError::AmountTooSmall(MIN_SELL_AMOUNT));
		}
		let symbol = symbol.to_lowercase();

		let mut state = self.state.write();
		state.user(username)?;
		let coin = state.coin(&symbol).cloned().ok_or(AccountError::CoinNotFound)?;
		let index = state
			.asset_index(username, &coin.symbol)
			.ok_or(AccountError::AssetNotHeld)?;
		if state.assets[index].amount < amount {
			return Err(AccountError::InsufficientAsset);
		}

		let total_value = checked(coin.current_price.checked_mul(amount))?;
		let wallet = state.wallet_mut(username)?;
		let wallet_balance = checked(wallet.balance.checked_add(total_value))?;
		wallet.balance = wallet_balance;
		let asset_balance = state.debit_asset(index, amount);
		state.record(username, TransactionKind::Sell, &coin, amount, total_value);
		drop(state);

		tracing::info!(username, symbol = %coin.symbol, %amount, %total_value, "Coin sold");
		Ok(SellReceipt {
			wallet_balance,
			asset_balance,
			coin: coin.symbol,
			sold_amount: amount,
			total_value,
		})
	}

	/// Convert `amount` of one held coin into another at current prices
	///
	/// Symbols are matched exactly and `amount` must be positive. A source
	/// holding that reaches zero is removed. Swaps leave no transaction record.
	pub fn swap(
		&self,
		username: &str,
		from: &str,
		to: &str,
		amount: Decimal,
	) -> AccountResult<SwapReceipt> {
		if from == to {
			return Err(AccountError::SameCoinSwap);
		}
		if amount <= Decimal::ZERO {
			return Err(AccountError::AmountTooSmall(Decimal::ZERO));
		}

		let mut state = self.state.write();
		state.user(username)?;
		let from_coin = state.coin(from).cloned().ok_or(AccountError::InvalidCoin)?;
		let to_coin = state.coin(to).cloned().ok_or(AccountError::InvalidCoin)?;
		let index = state
			.asset_index(username, from)
			.ok_or_else(|| AccountError::NothingToSwap(from.to_string()))?;
		if state.assets[index].amount < amount {
			return Err(AccountError::InsufficientSwapAmount);
		}
		let rate = from_coin
			.current_price
			.checked_div(to_coin.current_price)
			.ok_or(AccountError::InvalidCoin)?;
		let received = checked(amount.checked_mul(rate))?;

		state.credit_asset(username, to, received)?;
		state.debit_asset(index, amount);
		drop(state);

		tracing::info!(username, from, to, %amount, %received, "Coins swapped");
		Ok(SwapReceipt {
			swapped: amount,
			from_symbol: from.to_string(),
			received,
			to_symbol: to.to_string(),
		})
	}

	/// Holdings visible to `viewer`
	///
	/// Staff see `username`'s holdings when given, every holding otherwise.
	/// Everyone else sees their own.
	pub fn assets(&self, viewer: &str, username: Option<&str>) -> AccountResult<Vec<Asset>> {
		let state = self.state.read();
		let owner = if state.user(viewer)?.is_staff {
			username
		} else {
			Some(viewer)
		};
		Ok(state
			.assets
			.iter()
			.filter(|asset| owner.is_none_or(|owner| asset.username == owner))
			.cloned()
			.collect())
	}

	/// `username`'s trades, newest first.
	pub fn transactions(&self, username: &str) -> AccountResult<Vec<Transaction>> {
		let state = self.state.read();
		state.user(username)?;
		Ok(state
			.transactions
			.iter()
			.rev()
			.filter(|transaction| transaction.username == username)
			.cloned()
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::tests::store;
	use rstest::{fixture, rstest};

	fn dec(value: &str) -> Decimal {
		value.parse().unwrap()
	}

	#[fixture]
	fn market(store: AccountStore) -> AccountStore {
		store
			.upsert_coin("admin", Coin::new("btc", "Bitcoin", dec("100"), 1))
			.unwrap();
		store
			.upsert_coin("admin", Coin::new("eth", "Ethereum", dec("25"), 2))
			.unwrap();
		store.set_balance("admin", "sara", dec("1000")).unwrap();
		store
	}

	#[rstest]
	fn test_upsert_coin_requires_staff(store: AccountStore) {
		let result = store.upsert_coin("sara", Coin::new("btc", "Bitcoin", dec("1"), 1));
		assert_eq!(result, Err(AccountError::PermissionDenied));
	}

	#[rstest]
	fn test_coins_sorted_by_rank(market: AccountStore) {
		market
			.upsert_coin("admin", Coin::new("usdt", "Tether", dec("1"), 0))
			.unwrap();
		let symbols: Vec<_> = market.coins().into_iter().map(|coin| coin.symbol).collect();
		assert_eq!(symbols, ["usdt", "btc", "eth"]);
	}

	#[rstest]
	fn test_buy_debits_wallet(market: AccountStore) {
		// Act
		let transaction = market.buy("sara", "btc", dec("2.5")).unwrap();

		// Assert
		assert_eq!(transaction.kind, TransactionKind::Buy);
		assert_eq!(transaction.total_value, dec("250"));
		assert_eq!(market.wallet("sara").unwrap().balance, dec("750"));
		assert_eq!(market.assets("sara", None).unwrap()[0].amount, dec("2.5"));
	}

	#[rstest]
	#[case("btc", "11", AccountError::InsufficientBalance)]
	#[case("doge", "1", AccountError::CoinNotFound)]
	#[case("btc", "0", AccountError::AmountTooSmall(Decimal::ZERO))]
	fn test_buy_failures(
		market: AccountStore,
		#[case] symbol: &str,
		#[case] amount: &str,
		#[case] expected: AccountError,
	) {
		assert_eq!(market.buy("sara", symbol, dec(amount)).unwrap_err(), expected);
		assert_eq!(market.wallet("sara").unwrap().balance, dec("1000"));
	}

	#[rstest]
	fn test_sell_partial_and_full(market: AccountStore) {
		// Arrange
		market.buy("sara", "eth", dec("4")).unwrap();

		// Act
		let partial = market.sell("sara", "ETH", dec("1")).unwrap();
		let full = market.sell("sara", "eth", dec("3")).unwrap();

		// Assert
		assert_eq!(partial.asset_balance, dec("3"));
		assert_eq!(partial.coin, "eth");
		assert_eq!(full.asset_balance, Decimal::ZERO);
		assert_eq!(full.wallet_balance, dec("1000"));
		assert!(market.assets("sara", None).unwrap().is_empty());
	}

	#[rstest]
	#[case("btc", "0.00001", AccountError::AmountTooSmall(MIN_SELL_AMOUNT))]
	#[case("doge", "1", AccountError::CoinNotFound)]
	#[case("btc", "1", AccountError::AssetNotHeld)]
	#[case("eth", "5", AccountError::InsufficientAsset)]
	fn test_sell_failures(
		market: AccountStore,
		#[case] symbol: &str,
		#[case] amount: &str,
		#[case] expected: AccountError,
	) {
		market.buy("sara", "eth", dec("4")).unwrap();
		assert_eq!(market.sell("sara", symbol, dec(amount)).unwrap_err(), expected);
	}

	#[rstest]
	fn test_swap_uses_price_ratio(market: AccountStore) {
		// Arrange
		market.buy("sara", "btc", dec("1")).unwrap();

		// Act
		let receipt = market.swap("sara", "btc", "eth", dec("0.5")).unwrap();

		// Assert
		assert_eq!(receipt.received, dec("2"));
		let assets = market.assets("sara", None).unwrap();
		let held = |symbol: &str| assets.iter().find(|a| a.symbol == symbol).map(|a| a.amount);
		assert_eq!(held("btc"), Some(dec("0.5")));
		assert_eq!(held("eth"), Some(dec("2")));
		assert_eq!(market.transactions("sara").unwrap().len(), 1);
	}

	#[rstest]
	#[case("btc", "btc", "1", AccountError::SameCoinSwap)]
	#[case("btc", "doge", "1", AccountError::InvalidCoin)]
	#[case("BTC", "eth", "1", AccountError::InvalidCoin)]
	#[case("eth", "btc", "1", AccountError::NothingToSwap("eth".to_string()))]
	#[case("btc", "eth", "2", AccountError::InsufficientSwapAmount)]
	#[case("btc", "eth", "0", AccountError::AmountTooSmall(Decimal::ZERO))]
	#[case("btc", "eth", "-10", AccountError::AmountTooSmall(Decimal::ZERO))]
	fn test_swap_failures(
		market: AccountStore,
		#[case] from: &str,
		#[case] to: &str,
		#[case] amount: &str,
		#[case] expected: AccountError,
	) {
		// Arrange
		market.buy("sara", "btc", dec("1")).unwrap();

		// Act
		let error = market.swap("sara", from, to, dec(amount)).unwrap_err();

		// Assert
		assert_eq!(error, expected);
		let assets = market.assets("sara", None).unwrap();
		assert_eq!(assets.len(), 1);
		assert_eq!(assets[0].amount, dec("1"));
	}

	#[rstest]
	fn test_swap_whole_holding_drops_source(market: AccountStore) {
		// Arrange
		market.buy("sara", "btc", dec("1")).unwrap();

		// Act
		let receipt = market.swap("sara", "btc", "eth", dec("1")).unwrap();

		// Assert
		assert_eq!(receipt.received, dec("4"));
		let assets = market.assets("sara", None).unwrap();
		assert_eq!(assets.len(), 1);
		assert_eq!(assets[0].symbol, "eth");
		assert_eq!(assets[0].amount, dec("4"));
	}

	#[rstest]
	fn test_buy_overflow_is_rejected(market: AccountStore) {
		// Act
		let error = market.buy("sara", "btc", Decimal::MAX).unwrap_err();

		// Assert
		assert_eq!(error, AccountError::AmountTooLarge);
		assert_eq!(market.wallet("sara").unwrap().balance, dec("1000"));
		assert!(market.assets("sara", None).unwrap().is_empty());
		assert!(market.transactions("sara").unwrap().is_empty());
	}

	#[rstest]
	fn test_sell_into_full_wallet_is_rejected(market: AccountStore) {
		// Arrange
		market.buy("sara", "btc", dec("1")).unwrap();
		market.set_balance("admin", "sara", Decimal::MAX).unwrap();

		// Act
		let error = market.sell("sara", "btc", dec("1")).unwrap_err();

		// Assert
		assert_eq!(error, AccountError::AmountTooLarge);
		assert_eq!(market.wallet("sara").unwrap().balance, Decimal::MAX);
		assert_eq!(market.assets("sara", None).unwrap()[0].amount, dec("1"));
		assert_eq!(market.transactions("sara").unwrap().len(), 1);
	}

	#[rstest]
	fn test_asset_visibility(market: AccountStore) {
		market.set_balance("admin", "admin", dec("100")).unwrap();
		market.buy("admin", "eth", dec("1")).unwrap();
		market.buy("sara", "btc", dec("1")).unwrap();

		assert_eq!(market.assets("admin", None).unwrap().len(), 2);
		assert_eq!(market.assets("admin", Some("sara")).unwrap()[0].symbol, "btc");
		assert_eq!(market.assets("sara", Some("admin")).unwrap()[0].symbol, "btc");
	}

	#[rstest]
	fn test_transactions_newest_first(market: AccountStore) {
		market.buy("sara", "btc", dec("1")).unwrap();
		market.sell("sara", "btc", dec("1")).unwrap();

		let kinds: Vec<_> = market
			.transactions("sara")
			.unwrap()
			.into_iter()
			.map(|t| t.kind)
			.collect();

		assert_eq!(kinds, [TransactionKind::Sell, TransactionKind::Buy]);
	}

	#[rstest]
	fn test_wallets_visibility(market: AccountStore) {
		assert_eq!(market.wallets("admin").unwrap().len(), 2);
		assert_eq!(market.wallets("sara").unwrap().len(), 1);
	}
}
