//! Scroll-related CSI sequence handling

use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_scroll(
        &mut self,
        action: char,
        params: &Params,
        _intermediates: &[u8],
    ) {
        match action {
            'S' => {
                // Scroll up (SU)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.scroll_region_up(n.max(1));
            }
            'T' => {
                // Scroll down (SD)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.scroll_region_down(n.max(1));
            }
            'r' => {
                // Set scroll region (DECSTBM)
                let mut iter = params.iter();
                let top = iter.next().and_then(|p| p.first()).copied().unwrap_or(0) as usize;
                let bottom = iter.next().and_then(|p| p.first()).copied().unwrap_or(0) as usize;
                self.set_scroll_region(top, bottom);
            }
            _ => {}
        }
    }
}
