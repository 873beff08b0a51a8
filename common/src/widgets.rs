//! 小さなUIウィジェットの状態
//!
//! タイマーやスクロールイベントはWeb側が持ち、ここでは
//! イベント1回ごとの状態遷移だけを扱う。

/// スライドショーの切り替え間隔
pub const SLIDESHOW_INTERVAL_MS: u32 = 5000;

/// 「トップへ戻る」ボタンを出すスクロール量(px)
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// 画像のスライドショー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// 2枚以上ある時だけタイマーを動かす
    pub fn should_rotate(&self) -> bool {
        self.len > 1
    }

    /// タイマー1回分進める（末尾の次は先頭）
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

/// 「トップへ戻る」ボタンの表示判定
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}
