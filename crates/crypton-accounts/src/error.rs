//! Account and exchange errors
//!
//! Display strings are the Persian messages shown to the user.

/// Every way an account or exchange operation can be rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
	// Registration
	#[error("نام کاربری الزامی است")]
	UsernameRequired,
	#[error("این نام کاربری قبلا استفاده شده است.")]
	UsernameTaken,
	#[error("سن شما باید بیشتر از 10 سال باشد.")]
	AgeTooLow,
	#[error("یک عدد صحیح معتبر لازم است.")]
	InvalidAge,
	#[error("\"{0}\" یک انتخاب معتبر نیست.")]
	InvalidGender(String),

	// Authentication
	#[error("نام کاربری و رمز عبور الزامی است.")]
	MissingCredentials,
	#[error("کاربری با این نام کاربری یافت نشد.")]
	UserNotFound,
	#[error("رمز عبور اشتباه است.")]
	WrongPassword,
	#[error("حساب شما مسدود شده است.")]
	Inactive,
	#[error("رمز فعلی نادرست است.")]
	WrongOldPassword,
	#[error("رمز جدید باید حداقل ۸ کاراکتر باشد.")]
	WeakPassword,
	#[error("شما اجازه انجام این دستور را ندارید.")]
	PermissionDenied,

	// Exchange
	#[error("موجودی کیف پول کافی نیست.")]
	InsufficientBalance,
	#[error("رمز ارز موردنظر پیدا نشد")]
	CoinNotFound,
	#[error("شما این رمز ارز را در دارایی خود ندارید")]
	AssetNotHeld,
	#[error("مقدار رمز ارز کافی نیست")]
	InsufficientAsset,
	#[error("مطمئن شوید این مقدار بزرگتر یا مساوی {0} است.")]
	AmountTooSmall(rust_decimal::Decimal),
	#[error("مقدار وارد شده بیش از حد مجاز است.")]
	AmountTooLarge,
	#[error("نمیشه دو ارز مشابه رو سواپ کرد.")]
	SameCoinSwap,
	#[error("رمزارز نامعتبر است.")]
	InvalidCoin,
	#[error("شما هیچ {0} ندارید.")]
	NothingToSwap(String),
	#[error("مقدار کافی برای سواپ ندارید.")]
	InsufficientSwapAmount,

	// Community
	#[error("امتیاز باید بین ۱ تا ۵ باشد.")]
	InvalidStars,

	#[error("Password hashing failed: {0}")]
	Hash(String),
}

pub type AccountResult<T> = Result<T, AccountError>;
