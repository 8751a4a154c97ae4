//! 單槽快取單元

/// 快取單元
///
/// 持有目前值與其衍生值（例如矩陣與其逆矩陣）。衍生值只在 [`CacheCell::set`]
/// 替換目前值時清除，因此只要呼叫端透過 [`CacheCell::set_derived`] 存入的是
/// 目前值的衍生結果，快取就始終有效。單元本身不檢查內容。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCell<V, D = V> {
    value: V,
    derived: Option<D>,
}

impl<V, D> CacheCell<V, D> {
    /// 創建綁定初始值的快取單元，衍生值未設置
    pub fn new(value: V) -> Self {
        Self {
            value,
            derived: None,
        }
    }

    /// 替換目前值並清除衍生值
    pub fn set(&mut self, value: V) {
        self.value = value;
        if self.derived.take().is_some() {
            tracing::debug!("目前值已替換，清除快取的衍生值");
        }
    }

    /// 讀取目前值
    pub fn get(&self) -> &V {
        &self.value
    }

    /// 存入衍生值，不影響目前值
    pub fn set_derived(&mut self, derived: D) {
        self.derived = Some(derived);
    }

    /// 讀取衍生值，未計算時為 `None`
    pub fn get_derived(&self) -> Option<&D> {
        self.derived.as_ref()
    }

    /// 是否已有衍生值
    pub fn is_cached(&self) -> bool {
        self.derived.is_some()
    }

    /// 清除衍生值，保留目前值
    pub fn invalidate(&mut self) {
        self.derived = None;
    }

    /// 取回目前值
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: Default, D> Default for CacheCell<V, D> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V, D> From<V> for CacheCell<V, D> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}
