use log::info;

/// Track progress while downloading match files
pub struct FetchProgress {
    total: usize,
    downloaded: usize,
    failed: usize,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            downloaded: 0,
            failed: 0,
        }
    }

    pub fn record_downloaded(&mut self) {
        self.downloaded += 1;
        self.log_progress();
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
        self.log_progress();
    }

    pub fn downloaded(&self) -> usize {
        self.downloaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    fn current_count(&self) -> usize {
        self.downloaded + self.failed
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} files ({} failed)",
                current, self.total, self.failed
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
