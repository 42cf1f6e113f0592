#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdraw {
    pub activity_name: String,
    pub email: String,
}
