// 関連関数によるシングルトン
//
// インスタンスは非公開で、最初のアクセス時に一度だけ初期化される。
// API を変えずに、後からスレッドごとのインスタンスなどに切り替えられる。

use super::{Performer, FAREWELL};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};

static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

static INSTANCE: Lazy<LazyElvis> = Lazy::new(|| {
    INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
    tracing::info!("LazyElvis を初期化");
    LazyElvis {
        stage_name: "LazyElvis",
    }
});

#[derive(Debug)]
pub struct LazyElvis {
    stage_name: &'static str,
}

impl LazyElvis {
    /// 唯一のインスタンスを返す
    ///
    /// `fn() -> &'static LazyElvis` としてそのまま供給関数に使える。
    pub fn instance() -> &'static LazyElvis {
        &INSTANCE
    }

    /// 初期化が実行された回数（0 か 1）
    pub fn initializations() -> usize {
        INITIALIZATIONS.load(Ordering::SeqCst)
    }
}

impl Performer for LazyElvis {
    fn stage_name(&self) -> &'static str {
        self.stage_name
    }

    fn leave_the_building(&self) -> String {
        FAREWELL.to_string()
    }
}
