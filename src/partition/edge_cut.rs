use crate::math::Real;
use crate::partition::NormalizedDistances;

/// How the interface crosses one edge of a simplex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeCut {
    /// The endpoint distances have opposite signs.
    ///
    /// The zero level set of the linear interpolation of the distances crosses the edge
    /// `[i, j]` at `p_i + parameter * (p_j - p_i)`, with
    /// `parameter = |d_i| / (|d_i| + |d_j|)`, strictly between 0 and 1.
    Cut {
        /// The position of the intersection along the edge, measured from its first endpoint.
        parameter: Real,
    },
    /// The endpoint distances have the same sign.
    ///
    /// The auxiliary node of this edge collapses onto the endpoint with the largest
    /// absolute distance. Ties go to the first endpoint of the edge.
    Uncut {
        /// The vertex index the auxiliary node collapses onto.
        dominant: usize,
    },
    /// One of the endpoints was collapsed onto the interface: the edge has no auxiliary node.
    Collapsed,
}

impl EdgeCut {
    /// Classifies the edge with endpoints `edge[0]` and `edge[1]`.
    pub fn classify<const N: usize>(edge: [usize; 2], distances: &NormalizedDistances<N>) -> Self {
        let [i, j] = edge;

        if distances.is_collapsed(i) || distances.is_collapsed(j) {
            return EdgeCut::Collapsed;
        }

        let di = distances.values[i];
        let dj = distances.values[j];

        if di * dj < 0.0 {
            EdgeCut::Cut {
                parameter: di.abs() / (di.abs() + dj.abs()),
            }
        } else if dj.abs() > di.abs() {
            EdgeCut::Uncut { dominant: j }
        } else {
            EdgeCut::Uncut { dominant: i }
        }
    }

    /// Classifies all the edges of a simplex.
    pub fn classify_all<const N: usize, const E: usize>(
        edges: &[[usize; 2]; E],
        distances: &NormalizedDistances<N>,
    ) -> [Self; E] {
        edges.map(|edge| Self::classify(edge, distances))
    }

    /// Is this edge crossed by the interface?
    #[inline]
    pub fn is_cut(&self) -> bool {
        matches!(self, EdgeCut::Cut { .. })
    }

    /// The intersection parameter, if this edge is cut.
    #[inline]
    pub fn parameter(&self) -> Option<Real> {
        match self {
            EdgeCut::Cut { parameter } => Some(*parameter),
            _ => None,
        }
    }
}
